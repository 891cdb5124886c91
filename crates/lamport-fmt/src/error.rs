use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Expected a finite number, got {0}")]
    NonFinite(f64),
    #[error("Invalid amount: {0:?}. Must be a decimal number")]
    InvalidAmount(String),
    #[error("Amount has {digits} fraction digits but only {scale} are supported")]
    ExcessPrecision { digits: usize, scale: u32 },
    #[error("Ticks per second and ticks per slot must both be non-zero")]
    InvalidTickRate,
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("lamport-fmt config path doesnt exist")]
    ConfigPathDoesNotExist,
    #[error("Could not determine home directory. Please set the HOME environment variable.")]
    HomeDirectoryNotFound,
    #[error("Toml Parse error")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Anyhow err")]
    Anyhow(#[from] anyhow::Error),
}
