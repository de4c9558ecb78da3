

pub mod config;
pub mod error;

pub use config::BlogsmithConfig;
pub use error::{BlogsmithError, Result};
