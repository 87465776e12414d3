//! Interchangeable `BaseDataService` fulfillers.
//!
//! Any consumer written against `BaseDataService` (see [`describe`]) keeps
//! working whichever fulfiller it is given.

use crate::domain::model::DataRecord;
use crate::domain::ports::BaseDataService;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiDataService;

impl BaseDataService for ApiDataService {
    fn fetch_data(&self) -> DataRecord {
        DataRecord::new(1, "Data")
    }
}

/// Serves a fixed record captured at construction.
#[derive(Debug, Clone)]
pub struct CachedDataService {
    record: DataRecord,
}

impl CachedDataService {
    pub fn new(record: DataRecord) -> Self {
        Self { record }
    }
}

impl BaseDataService for CachedDataService {
    fn fetch_data(&self) -> DataRecord {
        self.record.clone()
    }
}

pub fn describe(service: &dyn BaseDataService) -> String {
    let record = service.fetch_data();
    format!("#{} {}", record.id, record.name)
}
