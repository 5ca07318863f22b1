use anyhow::Context;
use clap::Parser;
use tiny_jira::cli::{self, Cli};
use tiny_jira::env::RealEnv;
use tiny_jira::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = cli::run(&cli, &RealEnv)
        .with_context(|| format!("tiny-jira {} failed", cli.command.name()))?;
    println!("{output}");
    Ok(())
}
