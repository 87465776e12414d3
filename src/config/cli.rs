use super::wiring::{
    DataServiceKind, LoggerKind, PaymentProcessorKind, TransportConfig, WiringConfig,
    WiringSection,
};
use crate::domain::model::Amount;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "solid-demo")]
#[command(about = "Walks through the five SOLID examples")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.example.com/data")]
    pub api_endpoint: String,

    #[arg(long, default_value = "50")]
    pub amount: Amount,

    #[arg(long, default_value = "credit-card")]
    pub payment_processor: String,

    #[arg(long, default_value = "console")]
    pub logger: String,

    #[arg(long, default_value = "api")]
    pub data_service: String,

    #[arg(long, help = "TOML wiring file; replaces the wiring flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Skip the HTTP retrieval example")]
    pub skip_http: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Wiring from `--config` when given, otherwise from the flags.
    pub fn wiring(&self) -> Result<WiringConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading wiring from {}", path.display());
                WiringConfig::from_file(path)
            }
            None => Ok(WiringConfig {
                transport: TransportConfig {
                    api_endpoint: self.api_endpoint.clone(),
                    timeout_seconds: None,
                },
                wiring: WiringSection {
                    payment_processor: self.payment_processor.clone(),
                    logger: self.logger.clone(),
                    data_service: self.data_service.clone(),
                },
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("amount", self.amount, 0.0, 1_000_000.0)?;
        validate_one_of(
            "payment_processor",
            &self.payment_processor,
            PaymentProcessorKind::NAMES,
        )?;
        validate_one_of("logger", &self.logger, LoggerKind::NAMES)?;
        validate_one_of("data_service", &self.data_service, DataServiceKind::NAMES)?;
        Ok(())
    }
}
