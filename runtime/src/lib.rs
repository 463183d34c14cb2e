//! # Todos Runtime
//!
//! Synchronous Store runtime for `todos-core` reducers.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment for one scope
//! - **`StateReader`**: Read-only handle to the store's state
//! - **`Dispatcher`**: Handle that sends actions into the store
//!
//! Handles hold a weak reference to their store. Once the store is closed
//! or dropped, every handle call fails with [`StoreError::NotInitialized`].
//!
//! ## Example
//!
//! ```ignore
//! use todos_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//! let reader = store.state_reader();
//! let dispatcher = store.dispatcher();
//!
//! dispatcher.send(Action::DoSomething)?;
//! let value = reader.read(|s| s.some_field)?;
//!
//! store.close();
//! assert!(dispatcher.send(Action::DoSomething).is_err());
//! ```

/// Scoped read and dispatch handles
pub mod handle;

/// Metric names and descriptions
pub mod metrics;

/// The Store runtime
pub mod store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A handle was used after its store's scope ended
        ///
        /// Returned by [`StateReader`](crate::StateReader) and
        /// [`Dispatcher`](crate::Dispatcher) once the owning store has been
        /// closed or dropped.
        #[error("store not initialized")]
        NotInitialized,

        /// Effects kept dispatching actions past the configured depth
        ///
        /// Actions applied before the limit was hit remain applied.
        #[error("effect feedback exceeded {0} nested dispatches")]
        FeedbackLimitExceeded(usize),
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use todos_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_max_feedback_depth(8);
///
/// assert_eq!(config.broadcast_capacity, 64);
/// assert_eq!(config.max_feedback_depth, 8);
/// assert_eq!(StoreConfig::new(0, 8).broadcast_capacity, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of applied actions buffered for each lagging subscriber
    pub broadcast_capacity: usize,
    /// Maximum nesting of actions dispatched by effects
    pub max_feedback_depth: usize,
}

impl StoreConfig {
    /// Default action broadcast capacity
    pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

    /// Default effect feedback depth
    pub const DEFAULT_MAX_FEEDBACK_DEPTH: usize = 32;

    /// Create a new configuration with custom values
    ///
    /// The broadcast capacity is clamped to at least 1.
    #[must_use]
    pub const fn new(broadcast_capacity: usize, max_feedback_depth: usize) -> Self {
        Self {
            broadcast_capacity: 0,
            max_feedback_depth,
        }
        .with_broadcast_capacity(broadcast_capacity)
    }

    /// Set the action broadcast capacity (clamped to at least 1)
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Set the maximum effect feedback depth
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BROADCAST_CAPACITY,
            Self::DEFAULT_MAX_FEEDBACK_DEPTH,
        )
    }
}

pub use error::StoreError;
pub use handle::{Dispatcher, StateReader};
pub use store::Store;
