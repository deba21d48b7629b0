const CHAINSTAT_VERSION: &str = env!("CARGO_PKG_VERSION");

// -- deps
#[macro_use]
extern crate serde;
#[macro_use]
extern crate tracing;
// -- modules
mod application;

use application::{Application, Config as AppConfig, Format};
use argh::FromArgs;
use dotenv::dotenv;
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(FromArgs)]
#[argh(
    description = "Print transaction statistics for the block sequences exported by each node.
Sources are labeled as Node 1, Node 2, ... in the order they are provided"
)]
pub struct Args {
    #[argh(switch, description = "render report as JSON")]
    pub json: bool,
    #[argh(switch, short = 'D', description = "enable TRACE log level")]
    pub debug: bool,
    #[argh(
        positional,
        description = "block sequence JSON files; overrides CHAINSTAT_SOURCES"
    )]
    pub sources: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::TRACE } else { Level::INFO })
        .with_writer(io::stderr)
        .init();
    info!("chainstat {}", CHAINSTAT_VERSION);
    let mut config = AppConfig::try_from_env()?.with_sources(args.sources);
    if args.json {
        config = config.with_format(Format::Json);
    }
    info!("configuration successfully loaded");
    let stdout = io::stdout();
    Application::init(config).run(&mut stdout.lock())
}
