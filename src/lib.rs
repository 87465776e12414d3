pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::WiringConfig;
pub use crate::core::{
    dip::{AppComponent, ConsoleLogger, MemoryLogger},
    injector::{Injector, InjectorBuilder},
    module::AppModule,
};
pub use utils::error::{Result, SolidError};
