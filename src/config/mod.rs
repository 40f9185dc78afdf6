//! Configuration module for Discount-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings default to the public site's current layout, so the
//! config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use discount_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Will scrape {} event pages", config.scrape.total_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScrapeConfig, SiteConfig};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
