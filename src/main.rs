use clap::Parser;
use team_registry::cli::{self, Cli, Command};
use team_registry::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().unwrap_or_default();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run(config).await,
        Command::Demo(args) => cli::demo::run(&config, args),
    }
}
