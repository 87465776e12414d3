use crate::core::srp::DEFAULT_API_URL;
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentProcessorKind {
    CreditCard,
    Paypal,
}

impl PaymentProcessorKind {
    pub const NAMES: &'static [&'static str] = &["credit-card", "paypal"];
}

impl FromStr for PaymentProcessorKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "credit-card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            other => Err(SolidError::UnknownFulfiller {
                contract: "PaymentProcessor",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "credit-card"),
            Self::Paypal => write!(f, "paypal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerKind {
    Console,
    Memory,
}

impl LoggerKind {
    pub const NAMES: &'static [&'static str] = &["console", "memory"];
}

impl FromStr for LoggerKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "console" => Ok(Self::Console),
            "memory" => Ok(Self::Memory),
            other => Err(SolidError::UnknownFulfiller {
                contract: "Logger",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataServiceKind {
    Api,
    Cached,
}

impl DataServiceKind {
    pub const NAMES: &'static [&'static str] = &["api", "cached"];
}

impl FromStr for DataServiceKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "api" => Ok(Self::Api),
            "cached" => Ok(Self::Cached),
            other => Err(SolidError::UnknownFulfiller {
                contract: "BaseDataService",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Cached => write!(f, "cached"),
        }
    }
}

/// Static wiring declaration, usually loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WiringConfig {
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub wiring: WiringSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub api_endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringSection {
    pub payment_processor: String,
    pub logger: String,
    pub data_service: String,
}

impl Default for WiringSection {
    fn default() -> Self {
        Self {
            payment_processor: PaymentProcessorKind::CreditCard.to_string(),
            logger: LoggerKind::Console.to_string(),
            data_service: DataServiceKind::Api.to_string(),
        }
    }
}

impl WiringConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn payment_processor(&self) -> Result<PaymentProcessorKind> {
        self.wiring.payment_processor.parse()
    }

    pub fn logger(&self) -> Result<LoggerKind> {
        self.wiring.logger.parse()
    }

    pub fn data_service(&self) -> Result<DataServiceKind> {
        self.wiring.data_service.parse()
    }
}

impl Validate for WiringConfig {
    fn validate(&self) -> Result<()> {
        validate_url("transport.api_endpoint", &self.transport.api_endpoint)?;
        if let Some(timeout) = self.transport.timeout_seconds {
            validate_range("transport.timeout_seconds", timeout, 1, 300)?;
        }

        self.payment_processor()?;
        self.logger()?;
        self.data_service()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WiringConfig::default();
        assert_eq!(config.transport.api_endpoint, DEFAULT_API_URL);
        assert_eq!(config.payment_processor().unwrap(), PaymentProcessorKind::CreditCard);
        assert_eq!(config.logger().unwrap(), LoggerKind::Console);
        assert_eq!(config.data_service().unwrap(), DataServiceKind::Api);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = WiringConfig::from_toml_str(
            r#"
[wiring]
payment_processor = "paypal"
"#,
        )
        .unwrap();

        assert_eq!(config.payment_processor().unwrap(), PaymentProcessorKind::Paypal);
        assert_eq!(config.logger().unwrap(), LoggerKind::Console);
        assert_eq!(config.transport, TransportConfig::default());
    }

    #[test]
    fn test_unknown_fulfiller_rejected() {
        let config = WiringConfig::from_toml_str(
            r#"
[wiring]
logger = "syslog"
"#,
        )
        .unwrap();

        match config.validate() {
            Err(SolidError::UnknownFulfiller { contract, name }) => {
                assert_eq!(contract, "Logger");
                assert_eq!(name, "syslog");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_endpoint_and_timeout() {
        let mut config = WiringConfig::default();
        config.transport.api_endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = WiringConfig::default();
        config.transport.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = WiringConfig::from_toml_str("[wiring\nlogger = ").unwrap_err();
        assert!(matches!(err, SolidError::TomlParse(_)));
    }

    #[test]
    fn test_kind_names_round_trip() {
        for name in PaymentProcessorKind::NAMES {
            assert_eq!(name.parse::<PaymentProcessorKind>().unwrap().to_string(), *name);
        }
        for name in LoggerKind::NAMES {
            assert_eq!(name.parse::<LoggerKind>().unwrap().to_string(), *name);
        }
        for name in DataServiceKind::NAMES {
            assert_eq!(name.parse::<DataServiceKind>().unwrap().to_string(), *name);
        }
    }
}
