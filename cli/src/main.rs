//! Simple CLI / REPL for evaluating arithmetic expressions and explaining syntax errors.

use anyhow::{ensure, format_err};
use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use num_traits::FloatConst;

use std::{
    io::{self, Read},
    process,
    str::FromStr,
};

use arithmetic_explain::{Environment, NumLiteral};

mod common;
mod messages;
mod repl;

use crate::{
    common::{EvalResult, Reporter, ERROR_EXIT_CODE},
    repl::repl,
};

const AFTER_HELP: &str = "\
EXIT CODES:
    0    Normal exit
    1    Invalid command-line option
    2    Parsing error in non-interactive mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithmeticType {
    F32,
    F64,
}

impl FromStr for ArithmeticType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            _ => Err(format_err!("Invalid number type. Use one of `f32` or `f64`")),
        }
    }
}

/// Variable assignment in the `NAME=VALUE` form.
#[derive(Debug, Clone, PartialEq)]
struct VarAssignment {
    name: String,
    value: f64,
}

impl FromStr for VarAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format_err!("Variable must be specified as `NAME=VALUE`"))?;
        let name = name.trim();
        let mut chars = name.chars();
        let is_valid_name = chars.next().map_or(false, char::is_alphabetic)
            && chars.all(char::is_alphanumeric);
        ensure!(is_valid_name, "Invalid variable name: `{name}`");

        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|err| format_err!("Invalid value for variable `{name}`: {err}"))?;
        Ok(Self {
            name: name.to_owned(),
            value,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// CLI and REPL for evaluating arithmetic expressions and explaining syntax errors.
#[derive(Debug, Parser)]
#[command(version, after_help = AFTER_HELP)]
struct Args {
    /// Coloring of the output.
    #[arg(long, value_enum, env = "COLOR", default_value_t = ColorArg::Auto, global = true)]
    color: ColorArg,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the input.
    Eval(EvalArgs),
    /// Tokenize the input and output tokens.
    Tokens {
        /// Command to tokenize. If omitted, the command will be read from stdin.
        command: Option<String>,
    },
}

#[derive(Debug, clap::Args)]
struct EvalArgs {
    /// Launch the REPL for arithmetic expressions.
    #[arg(long, short = 'i')]
    interactive: bool,
    /// Type of numbers to use. Available values are `f32` and `f64`.
    #[arg(long, short = 'a', default_value = "f64")]
    arithmetic: ArithmeticType,
    /// Defines a variable in the `NAME=VALUE` form. Constants `pi` and `e` are always defined
    /// and can be overridden.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<VarAssignment>,
    /// Do not suggest corrected expressions on errors.
    #[arg(long)]
    no_fix: bool,
    /// Command to evaluate. If omitted, the command will be read from stdin.
    #[arg(conflicts_with = "interactive")]
    command: Option<String>,
}

fn read_command(command: Option<String>) -> io::Result<String> {
    if let Some(command) = command {
        Ok(command)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

impl Args {
    fn run(self) -> anyhow::Result<()> {
        let color_choice = ColorChoice::from(self.color);
        match self.command {
            Command::Eval(eval_args) => eval_args.run(color_choice),
            Command::Tokens { command } => {
                let command = read_command(command)?;
                Reporter::new(color_choice, false).tokenize_snippet(&command)?;
                Ok(())
            }
        }
    }
}

impl EvalArgs {
    fn run(self, color_choice: ColorChoice) -> anyhow::Result<()> {
        match self.arithmetic {
            ArithmeticType::F32 => self.run_inner::<f32>(color_choice),
            ArithmeticType::F64 => self.run_inner::<f64>(color_choice),
        }
    }

    fn create_env<T: NumLiteral + FloatConst>(&self) -> anyhow::Result<Environment<T>> {
        let mut env = Environment::new().with_var("pi", T::PI()).with_var("e", T::E());
        for var in &self.vars {
            let value = <T as num_traits::NumCast>::from(var.value).ok_or_else(|| {
                format_err!("Value of variable `{}` cannot be represented", var.name)
            })?;
            env.insert(var.name.clone(), value);
        }
        Ok(env)
    }

    fn run_inner<T>(self, color_choice: ColorChoice) -> anyhow::Result<()>
    where
        T: NumLiteral + FloatConst,
    {
        let env = self.create_env::<T>()?;
        let suggest_fixes = !self.no_fix;
        if self.interactive {
            repl(&env, color_choice, suggest_fixes)?;
            return Ok(());
        }

        let command = read_command(self.command)?;
        let mut reporter = Reporter::new(color_choice, suggest_fixes);
        match reporter.evaluate_snippet(command.trim_end(), &env)? {
            EvalResult::Ok => Ok(()),
            EvalResult::Errored => process::exit(ERROR_EXIT_CODE),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::try_parse().unwrap_or_else(|err| {
        // Help and version are printed to stdout and are not errors.
        let exit_code = i32::from(err.use_stderr());
        err.print().ok();
        process::exit(exit_code);
    });
    args.run()
}
