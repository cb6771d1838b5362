use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use arith::{
    format_error,
    interpreter::{eval::evaluate, printer::print_tree},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

const USAGE: &str = "Usage: arith [--tokens] <file>\n       arith [--tokens] -e <expression>";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (show_tokens, rest) = match args.first().map(String::as_str) {
        Some("--tokens") => (true, &args[1..]),
        _ => (false, &args[..]),
    };

    let (file_name, source) = match rest {
        [flag, expression] if flag == "-e" => (String::from("shell"), expression.clone()),
        [file_path] => {
            let file_name = file_path.rsplit('/').next().unwrap_or(file_path).to_string();
            match read_to_string(file_path) {
                Ok(contents) => (file_name, contents),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path, error);
                    exit(1);
                }
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => fail(&format_error(&error, &source)),
    };

    println!("Tokenized in {:?}", start.elapsed());

    if show_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let (parser, parsed_ast) = parse(tokens, Rc::new(file_name));

    println!("Parsed in {:?} ({} nodes)", parse_start.elapsed(), parser.node_count());

    let ast = match parsed_ast {
        Ok(ast) => ast,
        Err(error) => fail(&format_error(&error, &source)),
    };

    print!("{}", print_tree(&ast));
    println!("{}", ast);

    match evaluate(&ast) {
        Ok(value) => println!("= {}", value),
        Err(error) => fail(&format_error(&error, &source)),
    }

    println!("Total time: {:?}", start.elapsed());
}

fn fail(message: &str) -> ! {
    eprint!("{}", message);
    exit(1)
}
