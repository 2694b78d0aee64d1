use crate::config::DaViewConfig;
use crate::database::RecordRepository;
use std::sync::Arc;

pub mod config;
pub mod database;
pub mod domain;
pub mod features;
pub mod viewer;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn RecordRepository>,
    pub config: Arc<DaViewConfig>,
}
