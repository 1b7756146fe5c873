use std::sync::Arc;

use clap::Parser;
use tracing::info;

use triviatui::cli::Cli;
use triviatui::client::{HttpBackend, TriviaBackend};
use triviatui::loader::Loader;
use triviatui::pagination::{page_count, QUESTIONS_PER_PAGE};
use triviatui::state::AppState;
use triviatui::{config, logging, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = config::resolve(&cli)?;

    logging::init(config.log_file.as_deref(), &config.log_filter)?;
    info!(base_url = %config.base_url, timeout = ?config.timeout, "starting");

    let backend = HttpBackend::new(&config.base_url, config.timeout)
        .map_err(|e| format!("Cannot create HTTP client: {}", e))?;

    // Handle --categories
    if cli.categories {
        let categories = backend
            .categories()
            .map_err(|e| format!("Cannot load categories: {}", e))?;
        for category in categories {
            println!("{:>4}  {}", category.id, category.name);
        }
        return Ok(());
    }

    // Handle --print-page
    if let Some(page) = cli.print_page {
        return print_page(&backend, page);
    }

    let state = AppState::new(backend.base_url());
    let (loader, load_rx) = Loader::new(Arc::new(backend));
    tui::run_tui(state, loader, load_rx)
}

fn print_page(backend: &HttpBackend, page: u32) -> Result<(), String> {
    let listing = backend
        .questions(page)
        .map_err(|e| format!("Cannot load page {}: {}", page, e))?;
    let categories: triviatui::model::CategoryMap =
        listing.categories.unwrap_or_default().into_iter().collect();

    println!(
        "Page {} of {} ({} questions)",
        page,
        page_count(listing.total_questions, QUESTIONS_PER_PAGE),
        listing.total_questions
    );
    for q in &listing.questions {
        println!(
            "{:>4}  [{}] (difficulty {}) {}",
            q.id,
            categories.resolve(q.category).unwrap_or("?"),
            q.difficulty,
            q.question
        );
    }
    Ok(())
}
