//! Wiring declaration: contract identity -> fulfiller.
//!
//! Contracts are keyed by `TypeId` of the (usually unsized) contract type, so
//! `dyn Logger` and `ConsoleLogger` are different keys. Consumers ask for the
//! contract and never learn which fulfiller sits behind it.

use crate::utils::error::{Result, SolidError};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

struct Provider<T: ?Sized> {
    factory: Box<dyn Fn() -> Arc<T> + Send + Sync>,
    instance: OnceLock<Arc<T>>,
}

impl<T: ?Sized> Provider<T> {
    fn resolve(&self) -> Arc<T> {
        self.instance.get_or_init(|| (self.factory)()).clone()
    }
}

struct Binding {
    contract: &'static str,
    provider: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct InjectorBuilder {
    bindings: HashMap<TypeId, Binding>,
}

impl InjectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `T` to an already constructed instance.
    pub fn provide_value<T>(self, value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.provide_factory::<T, _>(move || value.clone())
    }

    /// Binds `T` to a factory. The factory runs on first resolution and its
    /// result is shared by every later `get`. Re-binding `T` replaces the
    /// previous provider.
    pub fn provide_factory<T, F>(mut self, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        let contract = type_name::<T>();
        let provider = Provider::<T> {
            factory: Box::new(factory),
            instance: OnceLock::new(),
        };

        let previous = self.bindings.insert(
            TypeId::of::<T>(),
            Binding {
                contract,
                provider: Box::new(provider),
            },
        );
        if previous.is_some() {
            tracing::debug!("Rebinding {}", contract);
        } else {
            tracing::debug!("Binding {}", contract);
        }
        self
    }

    pub fn build(self) -> Injector {
        Injector {
            bindings: self.bindings,
        }
    }
}

pub struct Injector {
    bindings: HashMap<TypeId, Binding>,
}

impl Injector {
    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::new()
    }

    pub fn get<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let provider = self
            .bindings
            .get(&TypeId::of::<T>())
            .and_then(|binding| binding.provider.downcast_ref::<Provider<T>>())
            .ok_or(SolidError::MissingProvider {
                contract: type_name::<T>(),
            })?;

        Ok(provider.resolve())
    }

    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut contracts: Vec<&str> = self.bindings.values().map(|b| b.contract).collect();
        contracts.sort_unstable();
        f.debug_struct("Injector")
            .field("contracts", &contracts)
            .finish()
    }
}
