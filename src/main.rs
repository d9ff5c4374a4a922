use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use minicalc::interpreter::evaluator::Interpreter;

/// minicalc is a small calculator language with variables that persist
/// across statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the input as a file path instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree of each statement before evaluating it.
    #[arg(short, long)]
    ast: bool,

    /// Source text to evaluate; omit to start an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut interpreter = Interpreter::new();

    if let Some(contents) = args.contents {
        let source = if args.file {
            fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                std::process::exit(1);
            })
        } else {
            contents
        };

        execute(&source, &mut interpreter, args.ast);
    } else {
        repl(&mut interpreter, args.ast);
    }
}

/// Reads statements from stdin one line at a time, evaluating each against
/// the same interpreter so variables carry over. `exit` or `quit` leaves the
/// session; a bad line aborts only that line.
fn repl(interpreter: &mut Interpreter, show_ast: bool) {
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line == "exit" || line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        execute(line, interpreter, show_ast);
    }
}

/// Runs one buffer of source: values go to stdout, diagnostics and parse
/// errors to stderr.
fn execute(source: &str, interpreter: &mut Interpreter, show_ast: bool) {
    if show_ast && let Ok(statements) = minicalc::parse(source) {
        for statement in &statements {
            print!("{}", statement.render_tree());
        }
    }

    match minicalc::run(source, interpreter) {
        Ok(evaluation) => {
            for diagnostic in &evaluation.diagnostics {
                eprintln!("{diagnostic}");
            }
            if let Some(value) = evaluation.value {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
