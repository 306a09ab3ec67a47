use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Cannot distribute {total} into {parts} positive parts")]
    InsufficientTotal { total: u64, parts: usize },

    #[error("Expected neighbor count undefined for population {0} (needs more than 2)")]
    DegeneratePopulation(i64),

    #[error("Logan-Parman index undefined: expected neighbor count is exactly {0}")]
    UndefinedIndex(f64),

    #[error("Statewide {0} population is zero; county shares are undefined")]
    EmptyGroup(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
