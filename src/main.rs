use anyhow::Context;
use clap::Parser;
use hondana::catalog::{filter, Catalog, Category};
use hondana::cli::{format_books, Cli, Command};
use hondana::config::Config;
use hondana::logging::init_tracing;
use hondana::ui::app::App;
use hondana::ui::library::LibraryIntent;
use hondana::ui::runtime;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    let catalog = Catalog::sample();

    if let Some(Command::List { category, json }) = &cli.command {
        let category = category
            .as_deref()
            .map(Category::from_label)
            .unwrap_or_default();
        let books = filter(catalog.books(), &category);
        print!("{}", format_books(&books, *json)?);
        if *json {
            println!();
        }
        return Ok(());
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        "starting hondana"
    );

    let mut app = App::new(catalog, config.reader.clone());
    if let Some(category) = cli.category.as_deref() {
        app.dispatch_library(LibraryIntent::SelectCategory(Category::from_label(category)));
    }
    if let Some(book_id) = cli.book {
        app.open_book(book_id);
    }

    runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("terminal UI failed")?;
    Ok(())
}
