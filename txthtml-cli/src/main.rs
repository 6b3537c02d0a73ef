// Command-line interface for txthtml
//
// Converts a marked-up text file to HTML next to it (or into a configured output directory).
//
// Usage:
//  txthtml                         - Prompt for the input file on stdin
//  txthtml <input>                 - Convert <input> directly
//  txthtml <input> --output-dir D  - Write the HTML into D
//  txthtml --config <path>         - Layer a txthtml.toml over the defaults
//
// Messages on stdout/stderr are part of the interface and stay fixed; anything extra goes
// through tracing, filtered by RUST_LOG or logging.level.

use clap::{Arg, Command, ValueHint};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use txthtml_cli::prompt::prompt_for_path;
use txthtml_config::{Loader, TxthtmlConfig};
use txthtml_core::{ConvertError, Converter};

fn build_cli() -> Command {
    Command::new("txthtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert marked-up plain text files to HTML")
        .long_about(
            "txthtml converts a plain text file to an HTML file.\n\n\
            Markup:\n  \
            _Title_            header line, becomes <h1>\n  \
            (blank line)       paragraph marker, becomes <p>\n  \
            - item             unordered list item\n  \
            [[url][label]]     hyperlink\n\n\
            The output file is named after the input with its extension replaced by .html\n\
            and silently overwrites any existing file.\n\n\
            Examples:\n  \
            txthtml                          # Prompt for the input file\n  \
            txthtml notes.txt                # Writes notes.html\n  \
            txthtml notes.txt --output-dir out",
        )
        .arg(
            Arg::new("input")
                .help("Input file path (prompted for when omitted)")
                .required(false)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory for the HTML file (defaults to the input's directory)")
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a txthtml.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("output-dir").map(|s| s.as_str()),
    );
    init_logging(&config);

    let input = match matches.get_one::<String>("input") {
        Some(path) => path.clone(),
        None => read_input_path(),
    };

    handle_convert_command(&input, config.convert.output_dir);
}

/// Handle the conversion and map each failure to its user-facing message.
///
/// A missing or unopenable input is reported and the process still exits successfully; only
/// a failure after both files were opened exits with status 1.
fn handle_convert_command(input: &str, output_dir: Option<PathBuf>) {
    let converter = match output_dir {
        Some(dir) => Converter::new().with_output_dir(dir),
        None => Converter::new(),
    };

    match converter.convert(input) {
        Ok(summary) => {
            debug!(output = %summary.output.display(), "wrote output");
            println!("Conversion complete.");
        }
        Err(ConvertError::NotFound(_)) => {
            eprintln!("Input file does not exist.");
        }
        Err(err @ ConvertError::Open { .. }) => {
            debug!(error = %err, "open failed");
            eprintln!("Input file not found.");
        }
        Err(ConvertError::Io(err)) => {
            eprintln!("Error converting '{input}': {err}");
            std::process::exit(1);
        }
    }
}

fn read_input_path() -> String {
    let stdin = io::stdin();
    match prompt_for_path(stdin.lock(), io::stdout()) {
        Ok(Some(path)) => path,
        Ok(None) => {
            // The prompt was left without a newline
            println!();
            eprintln!("No input file given.");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error reading input file name: {err}");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>, output_dir: Option<&str>) -> TxthtmlConfig {
    let loader = Loader::new().with_optional_file("txthtml.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    let loaded = match output_dir {
        Some(dir) => loader.set_override("convert.output_dir", dir.to_string()),
        None => Ok(loader),
    }
    .and_then(Loader::build);

    loaded.unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(config: &TxthtmlConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
