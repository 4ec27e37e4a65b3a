pub mod cli;
pub mod router;
pub mod screens;
pub mod shell;

use std::io::{self, Write};
use crate::cli::{TokenHubCli, TokenHubCommand};
use crate::router::View;
use crate::screens::Context;
use crate::shell::Shell;

/// Runs one parsed command line against `ctx`, writing rendered output to stdout.
pub async fn run(cli: TokenHubCli, ctx: Context) -> anyhow::Result<()> {
    let output = match cli.command.unwrap_or(TokenHubCommand::Shell) {
        TokenHubCommand::Balance(args) => screens::balance::run(&ctx, &args).await?,
        TokenHubCommand::Deploy(args) => screens::deploy::run(&ctx, &args).await?,
        TokenHubCommand::Mint(args) => screens::mint::run(&ctx, &args).await?,
        TokenHubCommand::Burn(args) => screens::burn::run(&ctx, &args).await?,
        TokenHubCommand::Subscribe(args) => screens::newsletter::run(&ctx, &args)?,
        TokenHubCommand::Open { path } => match router::resolve(&path) {
            Some(View::Home) => screens::home::render(),
            Some(view) => {
                let mut shell = Shell::new(ctx);
                let mut stdout = io::stdout();
                writeln!(stdout, "{}", shell.open(view))?;
                shell.run(io::stdin().lock(), stdout).await?;
                String::new()
            }
            None => anyhow::bail!("No page at {}. Try `tokenhub open /` for the list.", path),
        },
        TokenHubCommand::Shell => {
            Shell::new(ctx).run(io::stdin().lock(), io::stdout()).await?;
            String::new()
        }
    };

    if !output.is_empty() {
        print!("{}", output);
    }
    Ok(())
}
