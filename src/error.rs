use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotogenicError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Runner error: {0}")]
    Runner(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PhotogenicError>;
