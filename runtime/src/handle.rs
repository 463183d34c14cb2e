//! Handles are how consumers reach a store without owning it.
//!
//! Both handle types hold a weak reference. They are cheap to clone, can be
//! passed anywhere, and stop working the moment the store's scope ends.

use crate::StoreError;
use crate::metrics::CLOSED_REJECTED_ACTIONS;
use std::sync::{PoisonError, RwLock, Weak};

/// Type-erased entry point into a store's dispatch loop
pub(crate) trait ActionSink<A>: Send + Sync {
    fn send(&self, action: A) -> Result<(), StoreError>;
}

fn scope_ended(operation: &'static str) -> StoreError {
    tracing::warn!(operation, "Store handle used after its scope ended");
    metrics::counter!(CLOSED_REJECTED_ACTIONS, "operation" => operation).increment(1);
    StoreError::NotInitialized
}

/// Read-only access to a store's state
///
/// Obtained from [`Store::state_reader`](crate::Store::state_reader).
pub struct StateReader<S> {
    state: Weak<RwLock<S>>,
}

impl<S> StateReader<S> {
    pub(crate) const fn new(state: Weak<RwLock<S>>) -> Self {
        Self { state }
    }

    /// Read the current state via a closure
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] if the store has been closed.
    pub fn read<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.upgrade().ok_or_else(|| scope_ended("read"))?;
        let guard = state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&*guard))
    }

    /// Clone the current state out of the store
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] if the store has been closed.
    pub fn snapshot(&self) -> Result<S, StoreError>
    where
        S: Clone,
    {
        self.read(S::clone)
    }

    /// Returns true while the owning store is open
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.state.strong_count() > 0
    }
}

impl<S> Clone for StateReader<S> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<S> std::fmt::Debug for StateReader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateReader")
            .field("live", &self.is_live())
            .finish()
    }
}

/// Sends actions into a store
///
/// Obtained from [`Store::dispatcher`](crate::Store::dispatcher).
pub struct Dispatcher<A> {
    sink: Weak<dyn ActionSink<A>>,
}

impl<A> Dispatcher<A> {
    pub(crate) fn new(sink: Weak<dyn ActionSink<A>>) -> Self {
        Self { sink }
    }

    /// Apply `action` to the store, same as [`Store::send`](crate::Store::send)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] if the store has been closed,
    /// or any error [`Store::send`](crate::Store::send) returns.
    pub fn send(&self, action: A) -> Result<(), StoreError> {
        let sink = self.sink.upgrade().ok_or_else(|| scope_ended("dispatch"))?;
        sink.send(action)
    }

    /// Returns true while the owning store is open
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.sink.strong_count() > 0
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sink: Weak::clone(&self.sink),
        }
    }
}

impl<A> std::fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("live", &self.is_live())
            .finish()
    }
}
