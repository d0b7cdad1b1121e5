// Command-line interface for adoc-json
//
// The binary reads an AsciiDoc document tree, as dumped to JSON by the AsciiDoc processor, and
// writes it back out in one of the schemas provided by the adoc-json library.
//
// Converting:
//
// The target schema is chosen with --to and defaults to the backend named in the configuration.
// Input is a file path, or "-" for stdin. Output goes to stdout unless -o is given.
// Usage:
//  adoc-json <input> [--to json|mdast] [--flat] [--no-asciidoc-data] [--compact] [-o <file>]  - Convert (default)
//  adoc-json convert <input> ...          - Same as above (explicit)
//  adoc-json data <input> [--compact]     - Print the attributes collected by the Mdast backend
//  adoc-json --list-backends              - List available backends
//
// Configuration:
//
// Defaults are embedded from adoc-json-config. An adoc-json.toml in the working directory is
// layered on top when present, and --config layers an explicit file after that. Flags win over both.

use adoc_json::{AstNode, Backend, BackendRegistry, ConverterOptions, MdastBackend};
use adoc_json_config::{AppConfig, Loader, LOCAL_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "data", "help"];

/// Global flags that may precede the input without naming a subcommand.
const GLOBAL_FLAGS: &[&str] = &["--list-backends", "--verbose", "-v"];

/// Global options that take a separate value.
const GLOBAL_OPTIONS: &[&str] = &["--config"];

fn build_cli() -> Command {
    Command::new("adoc-json")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert AsciiDoc document trees to JSON")
        .long_about(
            "adoc-json converts the document tree of an AsciiDoc processor into JSON.\n\n\
            Backends:\n  \
            - json:  plain dump using the processor's own vocabulary\n  \
            - mdast: Markdown AST compatible tree, consumable by unified/remark\n\n\
            The input is the processor's tree serialized as JSON (camelCase keys).\n\n\
            Examples:\n  \
            adoc-json doc.json                          # Mdast tree on stdout\n  \
            adoc-json doc.json --to json -o out.json    # Plain dump to a file\n  \
            adoc-json doc.json --flat --no-asciidoc-data\n  \
            cat doc.json | adoc-json - --compact        # Read stdin, single-line output",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-backends")
                .long("list-backends")
                .help("List available backends")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an adoc-json.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document tree (default command)")
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target backend (defaults to the configured backend)")
                        .long_help(
                            "Backend to convert with.\n\n\
                            Available backends: json, mdast\n\
                            Use --list-backends to see all names.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .args(mdast_args())
                .arg(compact_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("data")
                .about("Print the attributes collected during an Mdast conversion")
                .long_about(
                    "Runs the Mdast backend and prints the attribute records it collected\n\
                    instead of the tree. Each record holds the visit ordinal, the node name,\n\
                    the optional id and the copied attributes.",
                )
                .arg(input_arg())
                .args(mdast_args())
                .arg(compact_arg())
                .arg(output_arg()),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn mdast_args() -> [Arg; 2] {
    [
        Arg::new("flat")
            .long("flat")
            .help("Replace preamble and section wrappers by their children")
            .action(ArgAction::SetTrue),
        Arg::new("no-asciidoc-data")
            .long("no-asciidoc-data")
            .help("Leave out the AsciiDoc name and context fields")
            .action(ArgAction::SetTrue),
    ]
}

fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .help("Write single-line JSON")
        .action(ArgAction::SetTrue)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

/// Arguments with "convert" injected before the input when no subcommand is named. Leading
/// global arguments stay in front. Returns `None` when injection does not apply.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let mut index = 1;
    while let Some(arg) = args.get(index) {
        if GLOBAL_FLAGS.contains(&arg.as_str()) || arg.starts_with("--config=") {
            index += 1;
        } else if GLOBAL_OPTIONS.contains(&arg.as_str()) {
            index += 2;
        } else {
            break;
        }
    }

    let first = args.get(index)?;
    let is_input = first == "-" || !first.starts_with('-');
    if !is_input || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = args[..index].to_vec();
    injected.push("convert".to_string());
    injected.extend_from_slice(&args[index..]);
    Some(injected)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // First, try normal parsing. If no subcommand is given, retry with "convert".
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config, matches.get_flag("verbose"));

    if matches.get_flag("list-backends") {
        handle_list_backends_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("data", sub_matches)) => handle_data_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &AppConfig) {
    let backend = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.convert.backend.clone());
    let registry = BackendRegistry::with_defaults(converter_options(matches, config));

    // Validate the backend before touching the input
    if let Err(e) = registry.get(&backend) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let doc = read_document(input_path(matches));
    let text = registry
        .serialize(&doc, &backend, pretty_output(matches, config))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(matches.get_one::<String>("output").map(|s| s.as_str()), &text);
}

/// Handle the data command
fn handle_data_command(matches: &ArgMatches, config: &AppConfig) {
    let doc = read_document(input_path(matches));
    let conversion = MdastBackend::new(converter_options(matches, config)).convert(&doc);
    tracing::debug!(records = conversion.data.len(), "collected attribute records");

    let text = if pretty_output(matches, config) {
        serde_json::to_string_pretty(&conversion.data)
    } else {
        serde_json::to_string(&conversion.data)
    }
    .unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    write_output(matches.get_one::<String>("output").map(|s| s.as_str()), &text);
}

/// Handle the list-backends command
fn handle_list_backends_command() {
    let registry = BackendRegistry::default();
    println!("Available backends:\n");
    for name in registry.list_backends() {
        let description = registry
            .get(&name)
            .map(|backend| backend.description().to_string())
            .unwrap_or_default();
        println!("  {name:<8}{description}");
    }
}

fn input_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-")
}

fn read_document(input: &str) -> AstNode {
    let source = if input == "-" {
        io::read_to_string(io::stdin()).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        })
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    };

    AstNode::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}

/// Flags switch options on; they never switch off what the configuration enabled.
fn converter_options(matches: &ArgMatches, config: &AppConfig) -> ConverterOptions {
    let configured = ConverterOptions::from(&config.convert.mdast);
    configured
        .flat(configured.flat || matches.get_flag("flat"))
        .no_asciidoc_data(configured.no_asciidoc_data || matches.get_flag("no-asciidoc-data"))
}

fn pretty_output(matches: &ArgMatches, config: &AppConfig) -> bool {
    config.convert.pretty && !matches.get_flag("compact")
}

fn load_cli_config(explicit_path: Option<&str>) -> AppConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
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

/// RUST_LOG wins over the configured level; --verbose raises the configured level to debug.
fn init_logging(config: &AppConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
