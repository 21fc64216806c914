//! Command-line interface for Centaur.
//!
//! Usage:
//!   centaur compile `<input>` [`<output-dir>`] [--human `<name>`] [--ai `<name>`]
//!   centaur inspect `<input>`
//!   centaur init [`<name>`]

use centaur_cli::logging::{init_logging, LoggingConfig};
use centaur_cli::{DEFAULT_OUTPUT_DIR, DEFAULT_PROJECT_NAME};
use centaur_codegen::GeneratorOptions;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;

fn cli() -> Command {
    Command::new("centaur")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile Centaur component descriptions into HTML, CSS and JavaScript")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a .centaur file")
                .arg(Arg::new("input").help("Source file").required(true).index(1))
                .arg(
                    Arg::new("output")
                        .help("Output directory")
                        .default_value(DEFAULT_OUTPUT_DIR)
                        .index(2),
                )
                .arg(
                    Arg::new("human")
                        .long("human")
                        .help("Human author recorded in the generated headers")
                        .default_value("Human"),
                )
                .arg(
                    Arg::new("ai")
                        .long("ai")
                        .help("AI author recorded in the generated headers")
                        .default_value("Claude"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed program as JSON")
                .arg(Arg::new("input").help("Source file").required(true).index(1)),
        )
        .subcommand(
            Command::new("init")
                .about("Create a starter project")
                .arg(
                    Arg::new("name")
                        .help("Project directory name")
                        .default_value(DEFAULT_PROJECT_NAME)
                        .index(1),
                ),
        )
}

fn arg<'m>(matches: &'m ArgMatches, id: &str) -> &'m str {
    matches.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

fn is_verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("verbose"))
}

fn run(matches: &ArgMatches) -> centaur_cli::Result<()> {
    match matches.subcommand() {
        Some(("compile", sub)) => {
            let options = GeneratorOptions::new(arg(sub, "human"), arg(sub, "ai"));
            let written = centaur_cli::compile(
                Path::new(arg(sub, "input")),
                Path::new(arg(sub, "output")),
                options,
            )?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Some(("inspect", sub)) => {
            println!("{}", centaur_cli::inspect(Path::new(arg(sub, "input")))?);
        }
        Some(("init", sub)) => {
            let main = centaur_cli::init(Path::new("."), arg(sub, "name"))?;
            println!("{}", main.display());
        }
        _ => unreachable!("a subcommand is required"),
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let config = if is_verbose(&matches) {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    init_logging(config);

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
