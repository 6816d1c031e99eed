use std::{
    io::{self, Read},
    process::ExitCode,
};

use calc::{Constant, Function, Notation, calculate, format_result};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

/// calc is a simple command-line calculator for infix and Reverse Polish
/// Notation expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Use "Reverse Polish Notation" (postfix) instead of infix.
    #[arg(short, long)]
    rpn: bool,

    /// Increases logging on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression. All arguments are joined with spaces; standard input
    /// is read when none is given.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let matches = Args::command().after_help(help_footer()).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let expression = if args.expression.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        args.expression.join(" ")
    };

    let notation = if args.rpn { Notation::Postfix } else { Notation::Infix };
    let value = calculate(&expression, notation)?;
    Ok(format_result(value))
}

/// Maps the number of `-v` flags to a default log filter; `RUST_LOG` wins.
fn init_logging(verbosity: u8) {
    let filter_level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(filter_level);
    env_logger::Builder::from_env(env).format_timestamp(None).init();
}

fn help_footer() -> String {
    let functions = Function::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
    let constants = Constant::ALL.iter().map(|c| c.name()).collect::<Vec<_>>();

    format!("Operators: + - * / % ^
Functions: {}
Constants: {}

For default infix expressions, function arguments must be given
in parentheses. For RPN, parentheses are illegal.
Use `--` before an expression that starts with '-'.

Examples:
  calc \"sin(3.1415926)\"
  calc \"(5 + 3) * 7\"
  calc \"2^3\"
  calc -r \"pi sin\"
  calc -r \"5 3 7 * +\"
  calc -r \"2 3 ^\"
  calc -- \"-3 + 4\"",
            functions.join(", "),
            constants.join(", "))
}
