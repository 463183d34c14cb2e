//! # Todos Testing
//!
//! Testing utilities for reducers and stores.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Assertion helpers for reducer effects
//! - [`ActionRecorder`]: Collects actions broadcast by a store
//!
//! ## Example
//!
//! ```ignore
//! use todos_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(CounterReducer)
//!     .with_env(CounterEnvironment)
//!     .given_state(CounterState { count: 0 })
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod recorder;
pub mod reducer_test;

// Re-export commonly used items
pub use recorder::ActionRecorder;
pub use reducer_test::{assertions, ReducerTest};
