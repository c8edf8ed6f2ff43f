use std::error::Error as _;

use clap::Parser;

use deck::app::App;
use deck::catalog::Catalog;
use deck::cli::{Cli, render_listing};
use deck::error::{AppError, AppResult};
use deck::logging;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        report(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = cli.load_config()?;
    logging::init(cli.log_target(&config), &config.log.level)?;

    let catalog = Catalog::load(cli.decks_dir(&config))?;
    if cli.list {
        print!("{}", render_listing(&catalog, cli.json)?);
        return Ok(());
    }

    let route = cli.route()?;
    tracing::info!(route = %route, "starting viewer");
    let mut app = App::with_route(catalog, config, route);
    app.run().await
}

fn report(err: &AppError) {
    eprintln!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
