// Adapters layer: concrete implementations for external collaborators (http, console output).

pub mod http;
pub mod sink;

pub use http::ReqwestTransport;
pub use sink::{MemorySink, StdoutSink};
