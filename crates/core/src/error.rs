use thiserror::Error;

#[derive(Error, Debug)]
pub enum GddError {
    #[error("no settings configured for user: {0}")]
    ConfigurationMissing(String),

    #[error("no location configured for user: {0}")]
    LocationNotConfigured(String),

    #[error("upstream weather failure: {0}")]
    UpstreamWeather(String),

    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("cache error: {0}")]
    Cache(String),
}
