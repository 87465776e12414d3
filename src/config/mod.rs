#[cfg(feature = "cli")]
pub mod cli;
pub mod wiring;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use wiring::{DataServiceKind, LoggerKind, PaymentProcessorKind, WiringConfig};
