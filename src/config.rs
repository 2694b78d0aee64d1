use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataBackend {
    /// Read the scraper's SQLite snapshot directly.
    Sqlite,
    /// Query the hosted data service over HTTPS.
    Hosted,
}

#[derive(Clone, Debug)]
pub struct DaViewConfig {
    pub data_backend: DataBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub data_service_url: String,
    pub data_service_key: String,
    pub frontend_path: PathBuf,
}

impl DaViewConfig {
    pub fn from_env() -> Self {
        let data_backend = match std::env::var("DATA_BACKEND").as_deref() {
            Ok("hosted") => DataBackend::Hosted,
            _ => DataBackend::Sqlite,
        };

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://da_records.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let data_service_url = match data_backend {
            DataBackend::Hosted => std::env::var("DATA_SERVICE_URL")
                .expect("Failed to determine DATA_SERVICE_URL from environment variables"),
            DataBackend::Sqlite => std::env::var("DATA_SERVICE_URL").unwrap_or_default(),
        };

        let data_service_key = match data_backend {
            DataBackend::Hosted => std::env::var("DATA_SERVICE_KEY")
                .expect("Failed to determine DATA_SERVICE_KEY from environment variables"),
            DataBackend::Sqlite => std::env::var("DATA_SERVICE_KEY").unwrap_or_default(),
        };

        let frontend_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH").unwrap_or_else(|_| "./dist".to_string()),
        );

        Self {
            data_backend,
            database_url,
            max_connections,
            data_service_url,
            data_service_key,
            frontend_path,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub api_base_url: String,
    pub output_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        let output_path = PathBuf::from(
            std::env::var("VIEWER_OUTPUT_PATH").unwrap_or_else(|_| "./dist/index.html".to_string()),
        );

        let csv_path = std::env::var("VIEWER_CSV_PATH").ok().map(PathBuf::from);

        Self {
            api_base_url,
            output_path,
            csv_path,
        }
    }
}
