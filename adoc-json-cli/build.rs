use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the backends registered by BackendRegistry::with_defaults.
// Build scripts can't link against the library they belong to, so the names are repeated here.
const AVAILABLE_BACKENDS: &[&str] = &["json", "mdast"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = Arg::new("input")
        .help("Input file path, or - for stdin")
        .index(1)
        .value_hint(ValueHint::FilePath);
    let flags = [
        Arg::new("flat").long("flat").action(ArgAction::SetTrue),
        Arg::new("no-asciidoc-data")
            .long("no-asciidoc-data")
            .action(ArgAction::SetTrue),
        Arg::new("compact").long("compact").action(ArgAction::SetTrue),
        Arg::new("output")
            .long("output")
            .short('o')
            .value_hint(ValueHint::FilePath),
    ];

    let mut cmd = Command::new("adoc-json")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert AsciiDoc document trees to JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-backends")
                .long("list-backends")
                .help("List available backends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("verbose").long("verbose").short('v').action(ArgAction::SetTrue))
        .subcommand(
            Command::new("convert")
                .arg(input.clone())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target backend")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_BACKENDS,
                        )),
                )
                .args(flags.clone()),
        )
        .subcommand(Command::new("data").arg(input).args(flags));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "adoc-json", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "adoc-json", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "adoc-json", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
