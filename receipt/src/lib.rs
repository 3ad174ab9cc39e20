#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod query_service;
pub mod render;
pub mod selected_file;
pub mod state;
pub mod upload_service;

#[cfg(test)]
mod mock;

pub use api::{DecisionApi, ReceiptApi};
pub use config::ApiConfig;
pub use controller::ViewController;
pub use error::{ActionError, ClientError};
pub use models::*;
pub use render::render;
pub use selected_file::SelectedFile;
pub use state::{Action, Failure, Phase, ViewState};
