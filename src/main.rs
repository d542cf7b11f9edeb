use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{debug, error, info};
use prefix_calc::{
    errors::errors::Error,
    evaluate_source, format_error,
    lexer::lexer::tokenize,
    parser::parser::ParseMode,
};

/// Reads arithmetic expressions line by line and prints each one in prefix form.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reject input that follows a complete expression
    #[arg(long)]
    strict: bool,

    /// Prompt printed before each line is read
    #[arg(long, default_value = "calc> ")]
    prompt: String,

    /// Print the token stream of each line before rendering it
    #[arg(long)]
    tokens: bool,

    /// Name shown in error diagnostics
    #[arg(long, default_value = "shell")]
    file: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    info!("starting with {:?}", args);

    let stdin = io::stdin();
    if let Err(err) = run(&args, stdin.lock(), &mut io::stdout(), &mut io::stderr()) {
        error!("failed to read input: {}", err);
        std::process::exit(1);
    }
}

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// Rendered expressions and the prompt go to `out`, diagnostics go to `err`.
/// Only a failing reader or writer ends the loop early.
fn run<R: BufRead, W: Write, E: Write>(args: &Args, mut input: R, out: &mut W, err: &mut E) -> io::Result<()> {
    let mode = if args.strict { ParseMode::Strict } else { ParseMode::Lenient };
    let mut buffer = Vec::new();

    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;

        buffer.clear();
        // End of input stops the loop rather than re-prompting
        if input.read_until(b'\n', &mut buffer)? == 0 {
            writeln!(out)?;
            debug!("end of input");
            return Ok(());
        }

        // Invalid bytes become U+FFFD, which the lexer then rejects for this line only
        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        if line.trim().is_empty() {
            continue;
        }

        if args.tokens {
            match tokenize(line.to_string(), Some(args.file.clone())) {
                Ok(tokens) => {
                    for token in tokens {
                        writeln!(out, "{}", token.debug())?;
                    }
                }
                Err(e) => debug!("tokenizing failed: {}", e),
            }
        }

        match evaluate_source(line, Some(args.file.clone()), mode) {
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(e) => report(err, &e, line)?,
        }
    }
}

fn report<E: Write>(err: &mut E, error: &Error, line: &str) -> io::Result<()> {
    debug!("line rejected: {}", error);
    writeln!(err, "{}", format_error(error, line))
}
