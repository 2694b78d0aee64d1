use axum::Router;
use daview_server::config::{DaViewConfig, DataBackend};
use daview_server::database::RecordRepository;
use daview_server::database::hosted::HostedRecordRepository;
use daview_server::database::sqlite::SqliteRecordRepository;
use daview_server::{AppState, features};
use dotenv;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = DaViewConfig::from_env();
    let shared_config = Arc::new(config.clone());

    let repo: Arc<dyn RecordRepository> = match config.data_backend {
        DataBackend::Sqlite => {
            // verify db exists
            if !Sqlite::database_exists(&config.database_url)
                .await
                .unwrap_or(false)
            {
                println!(
                    "Unable to connect to database at {}, creating...",
                    config.database_url
                );
                match Sqlite::create_database(&config.database_url).await {
                    Ok(_) => {
                        println!("Successfully created database at {}.", &config.database_url)
                    }
                    Err(e) => panic!(
                        "Unable to create database at {}. Error details: {}",
                        &config.database_url, e
                    ),
                };
            }

            // connect to our db
            let pool = match SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
            {
                Ok(pool) => pool,
                Err(e) => {
                    panic!("Failed to create pool on {}: {}", config.database_url, e);
                }
            };

            // run migrations so an empty snapshot still has the table
            sqlx::migrate!()
                .run(&pool)
                .await
                .expect("Failed to run database migrations.");

            Arc::new(SqliteRecordRepository::new(pool))
        }
        DataBackend::Hosted => {
            println!(
                "Using hosted data service at {}",
                config.data_service_url
            );
            Arc::new(HostedRecordRepository::new(
                config.data_service_url.clone(),
                config.data_service_key.clone(),
            ))
        }
    };

    let app_state = AppState {
        repo,
        config: shared_config.clone(),
    };

    println!("Starting server...");

    // start router setup

    // api router, where features are composed
    let api_router = Router::new().nest("/api", features::records::records_router());

    let app = Router::new()
        .merge(api_router)
        .fallback_service(ServeDir::new(config.frontend_path))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Server listening on http://0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
