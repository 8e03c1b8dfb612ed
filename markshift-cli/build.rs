use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names from markshift::Format
// We need to duplicate this here since build scripts can't access the library crate
const AVAILABLE_FORMATS: &[&str] = &["html", "markdown", "whatsapp"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markshift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting text between HTML, Markdown, and WhatsApp markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input file")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format")
                .required_unless_present("list-formats")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "markshift", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "markshift", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "markshift", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
