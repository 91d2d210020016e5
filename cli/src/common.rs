//! Common utils.

use codespan::{FileId, Files};
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    term::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor},
    term::{emit, Config as ReportingConfig},
};

use std::io::{self, Write};

use arithmetic_explain::{
    evaluate, tokenize, Environment, NumLiteral, ParseFailure, TokenKind, TokenStream,
};

use crate::messages::Explanation;

/// Exit code on parse errors.
pub const ERROR_EXIT_CODE: i32 = 2;

const HELP: &str = "Enter an arithmetic expression to evaluate it. Supported are numbers \
    (e.g., `42` or `1.5`), variables, binary operations `+`, `-`, `*`, `/` and `^` (power), \
    unary `-` and `+`, and parentheses. If the expression is malformed, it is explained why, \
    and a corrected expression is suggested if possible.";

const COMMANDS: &[(&str, &str)] = &[
    (".vars", "List defined variables and their values"),
    (".help", "Show this help"),
];

/// Code map containing evaluated code snippets.
#[derive(Debug, Default)]
struct CodeMap {
    files: Files<String>,
    snippet_count: usize,
}

impl CodeMap {
    fn add(&mut self, source: &str) -> FileId {
        self.snippet_count += 1;
        let file_name = format!("Snip #{}", self.snippet_count);
        self.files.add(file_name, source.to_owned())
    }
}

/// Outcome of evaluating a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalResult {
    Ok,
    Errored,
}

/// Reporter of evaluation results and failures.
pub struct Reporter {
    code_map: CodeMap,
    writer: StandardStream,
    out_writer: StandardStream,
    config: ReportingConfig,
    suggest_fixes: bool,
}

impl Reporter {
    pub fn new(color_choice: ColorChoice, suggest_fixes: bool) -> Self {
        Self {
            code_map: CodeMap::default(),
            writer: StandardStream::stderr(color_choice),
            out_writer: StandardStream::stdout(color_choice),
            config: ReportingConfig::default(),
            suggest_fixes,
        }
    }

    pub fn print_greeting(&self) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(
            writer,
            "arithmetic-explain REPL v{}",
            env!("CARGO_PKG_VERSION")
        )?;
        writer.reset()?;
        writeln!(writer, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
        writeln!(writer, "Type `.help` for help.")
    }

    pub fn print_help(&self) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", textwrap::fill(HELP, 80))?;
        writeln!(writer)?;
        writer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(writer, "Commands:")?;
        writer.reset()?;
        for (command, description) in COMMANDS {
            writeln!(writer, "  {command:<8}{description}")?;
        }
        Ok(())
    }

    pub fn dump_vars<T: NumLiteral>(&self, env: &Environment<T>) -> io::Result<()> {
        let mut writer = self.out_writer.lock();
        for (name, value) in env.variables() {
            write!(writer, "{name} = ")?;
            write_value(&mut writer, value)?;
            writeln!(writer)?;
        }
        Ok(())
    }

    pub fn dump_tokens(&self, tokens: &TokenStream<'_>) -> io::Result<()> {
        let mut writer = self.out_writer.lock();
        for token in tokens.tokens() {
            let span = token.span();
            write!(
                writer,
                "{:>3}:{:<3} ",
                span.location_line(),
                span.get_column()
            )?;
            let color = match token.kind() {
                TokenKind::Number => Some(Color::Green),
                TokenKind::Identifier => Some(Color::Cyan),
                TokenKind::Error => Some(Color::Red),
                _ => None,
            };
            writer.set_color(ColorSpec::new().set_fg(color))?;
            write!(writer, "{}", token.kind())?;
            writer.reset()?;
            if token.kind() == TokenKind::EndOfInput {
                writeln!(writer)?;
            } else {
                writeln!(writer, " `{}`", token.text())?;
            }
        }
        Ok(())
    }

    pub fn report_unknown_command(&mut self, line: &str) -> io::Result<()> {
        let file = self.code_map.add(line);
        let label = Label::primary(file, 0..line.len())
            .with_message("Use `.help` to find out commands");
        let diagnostic = Diagnostic::error()
            .with_message("Unknown command")
            .with_code("CMD")
            .with_labels(vec![label]);
        self.emit(&diagnostic)
    }

    /// Reports a parse failure.
    pub fn report_failure<T: NumLiteral>(
        &mut self,
        failure: &ParseFailure<'_>,
        env: &Environment<T>,
    ) -> io::Result<()> {
        let file = self.code_map.add(failure.input());
        let diagnosis = failure.explain(env);
        let explanation = Explanation::new(&diagnosis, self.suggest_fixes);

        let label = Label::primary(file, diagnosis.offending_span().range())
            .with_message(explanation.location);
        let notes: Vec<_> = explanation
            .complaint
            .into_iter()
            .chain(explanation.fix)
            .collect();
        let diagnostic = Diagnostic::error()
            .with_message(explanation.summary)
            .with_code("PARSE")
            .with_labels(vec![label])
            .with_notes(notes);
        self.emit(&diagnostic)
    }

    fn emit(&self, diagnostic: &Diagnostic<FileId>) -> io::Result<()> {
        emit(
            &mut self.writer.lock(),
            &self.config,
            &self.code_map.files,
            diagnostic,
        )
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }

    pub fn print_value<T: NumLiteral>(&self, value: T) -> io::Result<()> {
        let mut writer = self.out_writer.lock();
        write_value(&mut writer, value)?;
        writeln!(writer)
    }

    /// Evaluates `snippet` and reports the outcome.
    pub fn evaluate_snippet<T: NumLiteral>(
        &mut self,
        snippet: &str,
        env: &Environment<T>,
    ) -> io::Result<EvalResult> {
        match evaluate(snippet, env) {
            Ok(value) => {
                self.print_value(value)?;
                Ok(EvalResult::Ok)
            }
            Err(failure) => {
                self.report_failure(&failure, env)?;
                Ok(EvalResult::Errored)
            }
        }
    }

    pub fn tokenize_snippet(&self, snippet: &str) -> io::Result<()> {
        self.dump_tokens(&tokenize(snippet))
    }
}

fn write_value<T: NumLiteral>(writer: &mut impl WriteColor, value: T) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(writer, "{value}")?;
    writer.reset()
}
