//! Command-line organizer for league and cup championships.
//!
//! Each command loads a championship snapshot from the data directory, hands
//! it to the engine and writes the returned snapshot back. A rejected
//! operation never touches the stored file.

mod app;
mod commands;
mod config;
mod render;
mod store;

use anyhow::Error;
use pico_args::Arguments;

use config::CliConfig;
use store::SnapshotStore;

const HELP: &str = "\
Organize league and cup championships

USAGE:
  lc_cli <COMMAND> [ARGS] [OPTIONS]

COMMANDS:
  create  --name N --kind league|cup [--max N] [--description D] [--allow-same-team]
  join    <ID> --entrant ID --name N --team T
  start   <ID>
  record  <ID> --match M --score-a A --score-b B
  correct <ID> --match M --score-a A --score-b B
  show    <ID>
  list
  delete  <ID>

OPTIONS:
  --data-dir   DIR         Snapshot directory  [default: env LC_DATA_DIR or ./championships]
  --seed       N           Seed for reproducible draws  [default: env LC_SEED or random]
  --user       NAME        Who is acting  [default: env LC_USER or anonymous]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  LC_DATA_DIR              Snapshot directory
  LC_SEED                  Draw seed (unsigned integer)
  LC_USER                  Recorder identity
  RUST_LOG                 Log level (e.g., debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let cli = commands::parse(pargs)?;
    let config = CliConfig::from_env(cli.data_dir, cli.seed, cli.user)?;
    config.validate()?;

    env_logger::builder().format_target(false).init();

    let store = SnapshotStore::new(&config.data_dir);
    app::run(cli.command, &config, &store)
}
