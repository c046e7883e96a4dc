/// famtools: tools for TIGRFAM annotation wrangling
///
/// This is the entry point for the famtools CLI.
/// It is responsible for parsing the CLI arguments
/// and executing the appropriate subcommand [fam-tool].
///
/// This wrapper offers 6 different subcommands:
/// - fam-count
/// - fam-info
/// - fam-fetch
/// - fam-listing
/// - fam-roles
/// - run
///
/// Each subcommand/submodule offers different functionalities,
/// such as counting validated annotations, flattening INFO files
/// into a cutoff table, downloading report pages, parsing the
/// complete listing, and building the role hierarchy. The `run`
/// subcommand chains fam-info and fam-count in-process. In addition
/// to the latter, famtools also includes a hidden submodule:
/// 'config', which holds universal constants for the famtools
/// pipeline.
///
/// To get help on the subcommands, you can run:
///
/// ```shell
/// famtools fam-count -- --help
/// ```
///
use clap::{Args, Parser, Subcommand};
use famtools::lib;
use log::{error, info, Level};
use simple_logger::init_with_level;

use std::process::Command;

const ENTRY: &str = env!("CARGO_MANIFEST_DIR");
const RELEASES: &str = "target/release";

const HELP: &str = r#"
Usage: famtools run --info <PATHS> --tbl <PATH> <OUTDIR>

 Options:
  --info <PATHS>...           Paths to TIGRFAM INFO files delimited by comma
  --tbl <PATH>                Path to hmmsearch tbl output file
  <OUTDIR>                    Output directory for the cutoff and count tables
  -h, --help                  Print help
"#;

#[derive(Parser)]
#[command(name = "famtools")]
#[command(about = "famtools: tools for TIGRFAM annotation wrangling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "fam-count")]
    Count(FamArgs),
    #[command(name = "fam-info")]
    Info(FamArgs),
    #[command(name = "fam-fetch")]
    Fetch(FamArgs),
    #[command(name = "fam-listing")]
    Listing(FamArgs),
    #[command(name = "fam-roles")]
    Roles(FamArgs),
    #[command(name = "run")]
    Run(FamArgs),
}

#[derive(Args)]
struct FamArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, help = HELP)]
    args: Vec<String>,
}

fn main() {
    init_with_level(Level::Info).unwrap();
    let cli = Cli::parse();

    init();

    let (cmd, args) = match cli.command {
        Commands::Count(args) => ("fam-count", args.args),
        Commands::Info(args) => ("fam-info", args.args),
        Commands::Fetch(args) => ("fam-fetch", args.args),
        Commands::Listing(args) => ("fam-listing", args.args),
        Commands::Roles(args) => ("fam-roles", args.args),
        Commands::Run(args) => ("run", args.args),
    };

    match cmd {
        "run" => lib(args),
        _ => {
            let package = std::path::Path::new(ENTRY)
                .parent()
                .expect("ERROR: Could not get parent dir")
                .join(RELEASES)
                .join(cmd);

            if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
                let output = Command::new(package)
                    .arg("--help")
                    .output()
                    .expect("ERROR: Failed to execute process");

                check_output(output);
            } else {
                let output = Command::new(package)
                    .args(args)
                    .output()
                    .expect("ERROR: Failed to execute process");

                check_output(output);
            }
        }
    }
}

fn check_output(output: std::process::Output) {
    if output.status.success() {
        info!("{}", String::from_utf8_lossy(&output.stdout));
    } else {
        error!("{}", String::from_utf8_lossy(&output.stderr));
        std::process::exit(1);
    }
}

fn init() {
    let message = format!(
        r#"

        famtools: tools for TIGRFAM annotation wrangling

        this is the entry point for the famtools CLI
        and it is responsible for parsing the CLI arguments
        for each fam-tool:

        - fam-count
        - fam-info
        - fam-fetch
        - fam-listing
        - fam-roles

        > version: {}

        * to get help on the subcommands, run:
            famtools <SUBCOMMAND> -- --help

        "#,
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", message);
}
