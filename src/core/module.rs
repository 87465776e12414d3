//! Composition root. Turns a `WiringConfig` into a populated `Injector`.

use crate::adapters::ReqwestTransport;
use crate::config::{DataServiceKind, LoggerKind, PaymentProcessorKind, WiringConfig};
use crate::core::dip::{ConsoleLogger, MemoryLogger};
use crate::core::injector::Injector;
use crate::core::isp::DocumentService;
use crate::core::lsp::{ApiDataService, CachedDataService};
use crate::core::ocp::{CreditCardProcessor, PaypalProcessor};
use crate::core::srp::DataService;
use crate::domain::model::DataRecord;
use crate::domain::ports::{
    BaseDataService, Deletable, Editable, HttpTransport, Logger, OutputSink, PaymentProcessor,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;
use std::time::Duration;

pub struct AppModule {
    injector: Injector,
    memory_logger: Option<Arc<MemoryLogger>>,
}

impl AppModule {
    pub fn from_config(config: &WiringConfig, sink: Arc<dyn OutputSink>) -> Result<Self> {
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match config.transport.timeout_seconds {
            Some(secs) => Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(secs))?),
            None => Arc::new(ReqwestTransport::new()),
        };
        Self::with_transport(config, transport, sink)
    }

    /// Same as `from_config` but with a caller-supplied transport.
    pub fn with_transport(
        config: &WiringConfig,
        transport: Arc<dyn HttpTransport>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self> {
        let payment_processor = config.payment_processor()?;
        let data_service = config.data_service()?;
        let logger = config.logger()?;
        tracing::debug!(
            "Wiring PaymentProcessor={}, BaseDataService={}, Logger={}",
            payment_processor,
            data_service,
            logger
        );

        let documents = Arc::new(DocumentService::new(sink.clone()));
        let mut builder = Injector::builder()
            .provide_value(Arc::new(DataService::new(
                transport,
                config.transport.api_endpoint.clone(),
            )))
            .provide_value::<dyn Editable>(documents.clone())
            .provide_value::<dyn Deletable>(documents);

        builder = match payment_processor {
            PaymentProcessorKind::CreditCard => builder
                .provide_value::<dyn PaymentProcessor>(Arc::new(CreditCardProcessor::new(
                    sink.clone(),
                ))),
            PaymentProcessorKind::Paypal => builder
                .provide_value::<dyn PaymentProcessor>(Arc::new(PaypalProcessor::new(
                    sink.clone(),
                ))),
        };

        builder = match data_service {
            DataServiceKind::Api => {
                builder.provide_value::<dyn BaseDataService>(Arc::new(ApiDataService))
            }
            DataServiceKind::Cached => builder.provide_value::<dyn BaseDataService>(Arc::new(
                CachedDataService::new(
                    DataRecord::new(1, "Data").with_field("cached", serde_json::Value::Bool(true)),
                ),
            )),
        };

        let mut memory_logger = None;
        builder = match logger {
            LoggerKind::Console => {
                builder.provide_value::<dyn Logger>(Arc::new(ConsoleLogger::new(sink)))
            }
            LoggerKind::Memory => {
                let logger = Arc::new(MemoryLogger::new());
                memory_logger = Some(logger.clone());
                builder.provide_value::<dyn Logger>(logger)
            }
        };

        Ok(Self {
            injector: builder.build(),
            memory_logger,
        })
    }

    pub fn injector(&self) -> &Injector {
        &self.injector
    }

    /// The in-memory logger, when `Logger` is wired to one.
    pub fn memory_logger(&self) -> Option<&Arc<MemoryLogger>> {
        self.memory_logger.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::core::dip::AppComponent;

    #[test]
    fn test_default_config_wires_every_contract() {
        let module =
            AppModule::from_config(&WiringConfig::default(), Arc::new(MemorySink::new())).unwrap();
        let injector = module.injector();

        assert!(injector.contains::<DataService>());
        assert!(injector.contains::<dyn PaymentProcessor>());
        assert!(injector.contains::<dyn BaseDataService>());
        assert!(injector.contains::<dyn Editable>());
        assert!(injector.contains::<dyn Deletable>());
        assert!(injector.contains::<dyn Logger>());
        assert!(module.memory_logger().is_none());

        // Only contracts some consumer resolves are bound.
        assert_eq!(injector.len(), 6);
        assert!(!injector.contains::<dyn HttpTransport>());
        assert!(!injector.contains::<dyn OutputSink>());
        assert!(!injector.contains::<DocumentService>());
    }

    #[test]
    fn test_memory_logger_wiring() {
        let mut config = WiringConfig::default();
        config.wiring.logger = "memory".to_string();
        let sink = MemorySink::new();
        let module = AppModule::from_config(&config, Arc::new(sink.clone())).unwrap();

        AppComponent::from_injector(module.injector())
            .unwrap()
            .greet("hello");

        assert_eq!(module.memory_logger().unwrap().entries(), vec!["hello"]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = WiringConfig::default();
        config.wiring.payment_processor = "cash".to_string();
        assert!(AppModule::from_config(&config, Arc::new(MemorySink::new())).is_err());
    }
}
