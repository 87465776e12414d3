use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No provider registered for contract {contract}")]
    MissingProvider { contract: &'static str },

    #[error("Unknown fulfiller '{name}' for contract {contract}")]
    UnknownFulfiller { contract: &'static str, name: String },
}

impl SolidError {
    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::Transport(e) if e.is_connect() => {
                "Could not reach the API endpoint".to_string()
            }
            SolidError::Transport(e) if e.is_status() => match e.status() {
                Some(status) => format!("API responded with status {}", status),
                None => "API responded with an error status".to_string(),
            },
            SolidError::Transport(_) => "API request failed".to_string(),
            SolidError::Io(e) => format!("File access failed: {}", e),
            SolidError::Serialization(_) => "Response body was not valid JSON".to_string(),
            SolidError::TomlParse(_) => "Wiring file is not valid TOML".to_string(),
            SolidError::InvalidConfigValue { field, reason, .. } => {
                format!("Check '{}': {}", field, reason)
            }
            SolidError::MissingProvider { contract } => {
                format!("Nothing is wired to {}", contract)
            }
            SolidError::UnknownFulfiller { contract, name } => {
                format!("'{}' cannot be wired to {}", name, contract)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
