//! REPL for arithmetic expressions.

use codespan_reporting::term::termcolor::ColorChoice;
use rustyline::{error::ReadlineError, DefaultEditor};

use std::io;

use arithmetic_explain::{Environment, NumLiteral};

use crate::common::Reporter;

fn map_readline_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}

pub fn repl<T: NumLiteral>(
    env: &Environment<T>,
    color_choice: ColorChoice,
    suggest_fixes: bool,
) -> io::Result<()> {
    let mut rl = DefaultEditor::new().map_err(map_readline_err)?;
    let mut reporter = Reporter::new(color_choice, suggest_fixes);
    reporter.print_greeting()?;

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())
                    .map_err(map_readline_err)?;

                match command {
                    ".vars" => reporter.dump_vars(env)?,
                    ".help" => reporter.print_help()?,
                    _ if command.starts_with('.') => reporter.report_unknown_command(command)?,
                    _ => {
                        reporter.evaluate_snippet(&line, env)?;
                    }
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("Bye");
                break Ok(());
            }

            Err(ReadlineError::Eof) => {
                break Ok(());
            }

            Err(err) => break Err(map_readline_err(err)),
        }
    }
}
