//! Narrow `Editable` and `Deletable` contracts, one unit implementing both.
//!
//! A consumer bound to `Editable` sees only `edit`:
//!
//! ```
//! use solid_principles::domain::ports::Editable;
//!
//! fn edit_through_edit_contract(target: &dyn Editable) {
//!     target.edit();
//! }
//! ```
//!
//! and reaching for `delete` through it is rejected at compile time:
//!
//! ```compile_fail
//! use solid_principles::domain::ports::Editable;
//!
//! fn delete_through_edit_contract<E: Editable>(target: &E) {
//!     target.delete();
//! }
//! ```

use crate::core::injector::Injector;
use crate::domain::ports::{Deletable, Editable, OutputSink};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct DocumentService {
    sink: Arc<dyn OutputSink>,
}

impl DocumentService {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Editable for DocumentService {
    fn edit(&self) {
        self.sink.emit("Editing item");
    }
}

impl Deletable for DocumentService {
    fn delete(&self) {
        self.sink.emit("Deleting item");
    }
}

pub struct EditButton {
    target: Arc<dyn Editable>,
}

impl EditButton {
    pub fn new(target: Arc<dyn Editable>) -> Self {
        Self { target }
    }

    pub fn from_injector(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get::<dyn Editable>()?))
    }

    pub fn click(&self) {
        self.target.edit();
    }
}

pub struct DeleteButton {
    target: Arc<dyn Deletable>,
}

impl DeleteButton {
    pub fn new(target: Arc<dyn Deletable>) -> Self {
        Self { target }
    }

    pub fn from_injector(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get::<dyn Deletable>()?))
    }

    pub fn click(&self) {
        self.target.delete();
    }
}
