use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typc::repl::{self, Options, PROMPT};

#[derive(Parser)]
#[clap(
    name = "typc",
    bin_name = "typc",
    about = "Type checker for literals and binary expressions"
)]
struct Args {
    /// Check a single line and exit
    #[clap(short, long, value_name = "LINE")]
    expr: Option<String>,

    /// Prompt printed before each line
    #[clap(long, default_value = PROMPT)]
    prompt: String,

    /// Print the canonical form before the type
    #[clap(long)]
    canonical: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let options = Options {
        prompt: args.prompt,
        canonical: args.canonical,
    };

    let Some(line) = args.expr else {
        repl::run(io::stdin().lock(), io::stdout().lock(), &options)?;
        return Ok(ExitCode::SUCCESS);
    };

    match repl::eval_line(&line, &options) {
        Ok(Some(rendered)) => println!("{rendered}"),
        Ok(None) => {}
        Err(err) => {
            println!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
