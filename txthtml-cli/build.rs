use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs, build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("txthtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert marked-up plain text files to HTML")
        .arg(
            Arg::new("input")
                .help("Input file path (prompted for when omitted)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory for the HTML file")
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a txthtml.toml configuration file")
                .value_hint(ValueHint::FilePath),
        );

    generate_to(Bash, &mut cmd, "txthtml", &outdir)?;
    generate_to(Zsh, &mut cmd, "txthtml", &outdir)?;
    generate_to(Fish, &mut cmd, "txthtml", &outdir)?;

    Ok(())
}
