pub mod dip;
pub mod injector;
pub mod isp;
pub mod lsp;
pub mod module;
pub mod ocp;
pub mod srp;

pub use crate::domain::model::{Amount, DataRecord, Payload};
pub use crate::domain::ports::{
    BaseDataService, Deletable, Editable, HttpTransport, Logger, OutputSink, PaymentProcessor,
};
pub use crate::utils::error::Result;
