use clap::Parser as _;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use self::command::CommandArgs;

mod chart;
mod command;
mod report;
mod util;

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    if args.logs_to_stderr() {
        init_tracing();
    }
    command::run(args)
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
