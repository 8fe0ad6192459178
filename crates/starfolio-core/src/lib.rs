pub mod animate;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod progress;
pub mod starfield;
pub mod theme;

pub use config::AppConfig;
pub use error::{Error, Result};
