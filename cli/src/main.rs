use std::io::{self, BufRead, IsTerminal, Write as _};
use std::process::ExitCode;

use clap::Parser;
use evalexpr::{bprint, destroy, Frontend, LBlue, UserFacing};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod json;

/// Environment variable holding the log filter, `warn` when unset.
const LOG_ENV: &str = "EVALEXPR_LOG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Evaluate integer arithmetic expressions, one per line of stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The parser turning expressions into syntax trees [possible values: climbing, recursive]
    #[arg(short, long, default_value_t = Frontend::Climbing)]
    parser: Frontend,

    /// The output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Print the fully parenthesized syntax tree instead of the value
    #[arg(long)]
    ast: bool,

    /// An expression that is evaluated instead of reading stdin
    #[arg(last = true)]
    expression: Vec<String>,
}

enum Output {
    Value(i64),
    Tree(String),
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "starting");

    if args.expression.is_empty() {
        eval_stdin(&args)
    } else {
        let input = args.expression.join(" ");
        exit_code(print_eval(&args, &input))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn eval_stdin(args: &Args) -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut buf = String::new();
    let mut all_ok = true;

    loop {
        if interactive {
            bprint!(LBlue, " >> ");
            if let Err(e) = output.flush() {
                warn!(error = %e, "error flushing prompt");
            }
        }

        buf.clear();
        match input.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                warn!(error = %e, "error reading line");
                eprintln!("Error reading line: {e}");
                return ExitCode::FAILURE;
            }
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        all_ok &= print_eval(args, line);
    }

    exit_code(all_ok)
}

/// Evaluate one expression and report the outcome, returns whether it
/// succeeded.
fn print_eval(args: &Args, input: &str) -> bool {
    let res = eval(args, input);
    match args.format {
        OutputFormat::Pretty => match &res {
            Ok(Output::Value(v)) => println!("{v}"),
            Ok(Output::Tree(t)) => println!("{t}"),
            Err(e) => eprintln!("{}\n", e.display(input)),
        },
        OutputFormat::Json => match serde_json::to_string(&json::Report::new(input, &res)) {
            Ok(s) => println!("{s}"),
            Err(e) => warn!(error = %e, "error serializing report"),
        },
    }

    res.is_ok()
}

fn eval(args: &Args, input: &str) -> evalexpr::Result<Output> {
    let ast = args.parser.parse(input)?;
    let out = if args.ast {
        Ok(Output::Tree(ast.to_string()))
    } else {
        ast.eval().map(Output::Value)
    };
    destroy(Some(ast));
    out
}
