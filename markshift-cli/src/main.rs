// Command-line interface for markshift
//
// This binary converts text between the formats supported by the markshift
// library: rich-text HTML, Markdown, and WhatsApp-style markup.
//
// The conversion needs a to and from pair. The from can be auto-detected from
// the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  markshift <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  markshift convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  markshift --list-formats              - List supported formats
//
// Rendering knobs:
//
// HTML output honors the [convert.render] section of markshift.toml.
// The --hardbreaks and --gfm flags override the configured values per run.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use markshift::{Clipboard, Format, RenderOptions, SystemClipboard};
use markshift_config::{Loader, MarkshiftConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("markshift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting text between HTML, Markdown, and WhatsApp markup")
        .long_about(
            "markshift is a command-line tool for moving text between rich-text\n\
            HTML, Markdown, and WhatsApp-style markup.\n\n\
            Commands:\n  \
            - convert: Transform between formats (default)\n\n\
            Examples:\n  \
            markshift notes.md --to whatsapp           # Convert to WhatsApp markup (stdout)\n  \
            markshift convert page.html --to markdown  # Same, with the explicit subcommand\n  \
            markshift notes.md --to html -o out.html   # Write HTML to a file\n  \
            markshift notes.md --to whatsapp --copy    # Also place the result on the clipboard",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markshift.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between text formats (default command)")
                .long_about(
                    "Convert text between the supported formats.\n\n\
                    Supported formats:\n  \
                    - html:      Rich-text HTML (.html, .htm)\n  \
                    - markdown:  CommonMark Markdown (.md, .markdown)\n  \
                    - whatsapp:  WhatsApp-style markup (.wa)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    markshift convert input.md --to whatsapp   # Convert to WhatsApp markup (stdout)\n  \
                    markshift convert page.html --to markdown  # HTML to Markdown\n  \
                    markshift input.md --to html -o out.html   # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .long_help(
                            "Source format to convert from.\n\n\
                            If not specified, the format is auto-detected from the file extension.\n\
                            Use this option to override auto-detection.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: html, markdown, whatsapp\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .long_help(
                            "Path to write the converted output.\n\n\
                            If not specified, output is written to stdout.\n\
                            The file extension should match the target format.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("copy")
                        .long("copy")
                        .help("Also place the converted text on the system clipboard")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("hardbreaks")
                        .long("hardbreaks")
                        .value_name("BOOL")
                        .help("Render single newlines as <br> tags in HTML output")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("gfm")
                        .long("gfm")
                        .value_name("BOOL")
                        .help("Enable tables, strikethrough, and autolinks in HTML output")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&args) {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "convert" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                match Format::detect_from_filename(input) {
                    Some(detected) => detected.name().to_string(),
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let copy = sub_matches.get_flag("copy");
            let options = render_options_from(&config, sub_matches);
            handle_convert_command(input, &from, to, output, copy, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Decide whether a failed parse looks like `markshift <file> ...` with the
/// "convert" subcommand left out.
fn should_inject_convert(args: &[String]) -> bool {
    args.len() > 1 && !args[1].starts_with('-') && args[1] != "convert" && args[1] != "help"
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    copy: bool,
    options: &RenderOptions,
) {
    let from = Format::from_name(from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let to = Format::from_name(to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    // Read input file
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let result = markshift::convert_with(&source, from, to, options);

    // A refused clipboard never aborts the conversion
    if copy {
        if let Err(err) = SystemClipboard::new().write_text(&result) {
            eprintln!("Warning: {err}");
        }
    }

    // Output
    match output {
        Some(path) => {
            fs::write(path, &result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{result}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Supported formats:\n");
    for format in Format::ALL {
        let extensions = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<10} {} ({extensions})",
            format.name(),
            format.description()
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MarkshiftConfig {
    let loader = Loader::new().with_optional_file("markshift.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Resolve render options from the configuration, then apply per-run flag
/// overrides on top.
fn render_options_from(config: &MarkshiftConfig, matches: &ArgMatches) -> RenderOptions {
    let mut options: RenderOptions = (&config.convert.render).into();
    if let Some(raw) = matches.get_one::<String>("hardbreaks") {
        options.hardbreaks = parse_bool_arg("hardbreaks", raw);
    }
    if let Some(raw) = matches.get_one::<String>("gfm") {
        options.gfm = parse_bool_arg("gfm", raw);
    }
    options
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --{flag}");
            std::process::exit(1);
        }
    }
}
