// Utility modules: configuration, errors, logging, prompting, validation
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod validation;
