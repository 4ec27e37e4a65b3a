use clap::Parser;
use tokenhub_cli::cli::TokenHubCli;
use tokenhub_cli::screens::{Context, Reported};
use tokenhub_shared::utilities::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let cli = TokenHubCli::parse();
    let ctx = Context::from_env(cli.api_url.clone());

    match tokenhub_cli::run(cli, ctx).await {
        Ok(()) => Ok(()),
        Err(err) if err.downcast_ref::<Reported>().is_some() => std::process::exit(1),
        Err(err) => Err(err),
    }
}
