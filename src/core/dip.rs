use crate::core::injector::Injector;
use crate::domain::ports::{Logger, OutputSink};
use crate::utils::error::Result;
use std::sync::{Arc, Mutex, PoisonError};

/// Emits each message unchanged to its output sink.
pub struct ConsoleLogger {
    sink: Arc<dyn OutputSink>,
}

impl ConsoleLogger {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        self.sink.emit(message);
    }
}

#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Consumer that only knows the `Logger` contract.
pub struct AppComponent {
    logger: Arc<dyn Logger>,
}

impl AppComponent {
    pub fn from_injector(injector: &Injector) -> Result<Self> {
        Ok(Self {
            logger: injector.get::<dyn Logger>()?,
        })
    }

    pub fn greet(&self, message: &str) {
        self.logger.log(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::utils::error::SolidError;

    #[test]
    fn test_console_logger_emits_unchanged() {
        let sink = MemorySink::new();
        let logger = ConsoleLogger::new(Arc::new(sink.clone()));
        logger.log("  spaced  message ");
        assert_eq!(sink.lines(), vec!["  spaced  message "]);
    }

    #[test]
    fn test_app_component_requires_logger_binding() {
        let injector = Injector::builder().build();
        let result = AppComponent::from_injector(&injector);
        assert!(matches!(result, Err(SolidError::MissingProvider { .. })));
    }

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        logger.log("one");
        logger.log("two");
        assert_eq!(logger.entries(), vec!["one", "two"]);
    }
}
