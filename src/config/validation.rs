use crate::config::types::Settings;
use crate::ConfigError;

/// Largest number of websites crawled at once
pub const MAX_CONCURRENCY: usize = 64;

fn check_user_agent(settings: &Settings) -> Result<(), ConfigError> {
    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn check_request_timeout(settings: &Settings) -> Result<(), ConfigError> {
    if !settings.request_timeout.is_finite() || settings.request_timeout <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be a positive number of seconds, got {}",
            settings.request_timeout
        )));
    }
    Ok(())
}

fn check_max_pages(settings: &Settings) -> Result<(), ConfigError> {
    if settings.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            settings.max_pages
        )));
    }
    Ok(())
}

fn check_concurrency(settings: &Settings) -> Result<(), ConfigError> {
    if settings.concurrency < 1 || settings.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, settings.concurrency
        )));
    }
    Ok(())
}

/// Resets every out-of-range value to its default
///
/// Each key is checked on its own, so one bad value never discards the
/// valid ones next to it. Every reset is logged as a warning.
pub fn sanitize(mut settings: Settings) -> Settings {
    let defaults = Settings::default();

    if let Err(e) = check_user_agent(&settings) {
        tracing::warn!("{}; using default '{}'", e, defaults.user_agent);
        settings.user_agent = defaults.user_agent;
    }

    if let Err(e) = check_request_timeout(&settings) {
        tracing::warn!("{}; using default {}", e, defaults.request_timeout);
        settings.request_timeout = defaults.request_timeout;
    }

    if let Err(e) = check_max_pages(&settings) {
        tracing::warn!("{}; using default {}", e, defaults.max_pages);
        settings.max_pages = defaults.max_pages;
    }

    if let Err(e) = check_concurrency(&settings) {
        tracing::warn!("{}; using default {}", e, defaults.concurrency);
        settings.concurrency = defaults.concurrency;
    }

    settings
}
