use chrono::Local;
use daview_server::config::ViewerConfig;
use daview_server::viewer::render::{render_csv, render_document};
use daview_server::viewer::{ApiClient, FetchOutcome, fetch_once};
use dotenv;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = ViewerConfig::from_env();

    println!("Viewer: fetching records from {}...", config.api_base_url);

    // one-shot fetch, issued once at startup and never re-triggered
    let client = ApiClient::new(config.api_base_url.clone());
    let fetch = tokio::spawn(fetch_once(client));

    let outcome = tokio::select! {
        res = fetch => res?,
        _ = tokio::signal::ctrl_c() => {
            println!("Viewer: interrupted before the fetch completed, exiting.");
            return Ok(());
        }
    };

    // failure degrades to a header-only table, there is no retry
    let records = match outcome {
        FetchOutcome::Loaded(records) => {
            println!("Viewer: loaded {} records.", records.len());
            records
        }
        FetchOutcome::Failed(message) => {
            eprintln!("Viewer: fetch failed: {}", message);
            Vec::new()
        }
    };

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_document(&records, &generated_at);

    ensure_parent_dir(&config.output_path)?;
    fs::write(&config.output_path, html)?;
    println!("Viewer: wrote table to {}", config.output_path.display());

    if let Some(csv_path) = &config.csv_path {
        ensure_parent_dir(csv_path)?;
        fs::write(csv_path, render_csv(&records))?;
        println!("Viewer: wrote CSV to {}", csv_path.display());
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
