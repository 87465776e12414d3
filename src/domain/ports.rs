use crate::domain::model::{Amount, DataRecord, Payload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External transport collaborator used by `DataService`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Payload>;
    async fn post(&self, url: &str, body: &Payload) -> Result<Payload>;
}

/// Console/log output collaborator. Receives plain text lines.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

pub trait PaymentProcessor: Send + Sync {
    fn process_payment(&self, amount: Amount);
}

/// Base contract for data providers.
///
/// Implementations must accept the no-argument call unconditionally and
/// return a record carrying both an `id` and a `name`.
pub trait BaseDataService: Send + Sync {
    fn fetch_data(&self) -> DataRecord;
}

pub trait Editable: Send + Sync {
    fn edit(&self);
}

pub trait Deletable: Send + Sync {
    fn delete(&self);
}

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}
