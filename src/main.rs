use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use frontend::{
    ast::ast::pretty_print,
    compiler::compiler::generate,
    display_error,
    errors::diagnostics::ConsoleSink,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let emit = args.iter().any(|arg| arg == "--emit");
    let raw = args.iter().any(|arg| arg == "--raw");
    let files: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if files.len() != 1 {
        println!("Usage: frontend <file> [--emit] [--raw]");
        process::exit(2);
    }

    let file_path = PathBuf::from(files[0]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| files[0].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            println!("Failed to read {}: {}", file_path.display(), error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let (root, scopes) = match parse(&source, &file_name) {
        Ok(parsed) => parsed,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };
    println!("Parsed in {:?}", start.elapsed());

    let type_check_start = Instant::now();
    let root = match type_check(root, &scopes, &mut ConsoleSink) {
        Ok(root) => root,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };
    println!("Type checked in {:?}", type_check_start.elapsed());

    if raw {
        println!("{}", root);
    } else {
        println!("{}", pretty_print(&root.to_string()));
    }

    if emit {
        let generate_start = Instant::now();
        match generate(&root) {
            Ok(instructions) => {
                println!("Generated in {:?}", generate_start.elapsed());
                for instruction in instructions {
                    println!("{}", instruction);
                }
            }
            Err(error) => {
                display_error(&error, &source);
                process::exit(1);
            }
        }
    }

    println!("Total time: {:?}", start.elapsed());
}
