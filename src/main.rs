use std::{fs, process::ExitCode};

use clap::Parser;
use log::{LevelFilter, debug, info};
use tally::{SymbolTable, evaluate};

mod logger;

/// tally evaluates programs of sequential integer assignments and prints the
/// resulting variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Pre-assigns a variable before the program runs, as `NAME=VALUE`.
    #[arg(short, long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    defines: Vec<(String, i64)>,

    /// Console log level.
    #[arg(long, env = "TALLY_LOG", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    contents: String,
}

/// Parses a `NAME=VALUE` definition from the command line.
fn parse_definition(definition: &str) -> Result<(String, i64), String> {
    let (name, value) = definition.split_once('=')
                                  .ok_or_else(|| format!("'{definition}' is not NAME=VALUE"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid_name = chars.next()
                          .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                     && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("'{}' is not an integer: {e}", value.trim()))?;
    Ok((name.to_string(), value))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut table: SymbolTable = args.defines.into_iter().collect();
    info!("running program with {} predefined variable(s)", table.len());

    let result = evaluate(&script, &mut table);
    print!("{table}");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("program stopped after {} variable(s) were assigned", table.len());
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
