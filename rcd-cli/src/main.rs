//! rcd-cli - render, validate and export research computing dashboards.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rcd-cli",
    version,
    about = "Research computing dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rcd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rcd_cmd::run(cli.command)
}
