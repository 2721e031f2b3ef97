//! Shared configuration for the notification codec workspace.

pub mod config;

pub use config::{load_dotenv, CodecConfig};
