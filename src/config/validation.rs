use crate::config::types::{Config, ScrapeConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Called once at startup, before any network activity; every violation is
/// fatal.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_scrape_config(&config.scrape)?;
    Ok(())
}

/// Validates the target-site layout configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            config.base_url
        )));
    }

    if config.news_path.is_empty() || !config.news_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "news-path must be a non-empty absolute path, got '{}'",
            config.news_path
        )));
    }

    if config.events_per_news_page < 1 {
        return Err(ConfigError::Validation(
            "events-per-news-page must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the scrape run configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.total_pages < 1 {
        return Err(ConfigError::Validation(
            "total-pages must be >= 1".to_string(),
        ));
    }

    if !config.request_rate.is_finite() || config.request_rate <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "request-rate must be a positive number, got {}",
            config.request_rate
        )));
    }

    Ok(())
}
