use crate::core::injector::Injector;
use crate::domain::model::Amount;
use crate::domain::ports::{OutputSink, PaymentProcessor};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct CreditCardProcessor {
    sink: Arc<dyn OutputSink>,
}

impl CreditCardProcessor {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, amount: Amount) {
        self.sink
            .emit(&format!("Processing credit card payment of ${}", amount));
    }
}

pub struct PaypalProcessor {
    sink: Arc<dyn OutputSink>,
}

impl PaypalProcessor {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl PaymentProcessor for PaypalProcessor {
    fn process_payment(&self, amount: Amount) {
        self.sink
            .emit(&format!("Processing PayPal payment of ${}", amount));
    }
}

/// Pays through whatever processor it was handed. New processors plug in
/// without touching this type.
pub struct PaymentService {
    processor: Arc<dyn PaymentProcessor>,
}

impl PaymentService {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    pub fn from_injector(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get::<dyn PaymentProcessor>()?))
    }

    pub fn make_payment(&self, amount: Amount) {
        tracing::debug!("Forwarding payment of {} to processor", amount);
        self.processor.process_payment(amount);
    }
}
