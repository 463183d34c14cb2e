//! In-memory to-do list store driven by a reducer.
//!
//! The list holds `{ id, text, done }` records in insertion order and
//! changes only through three commands:
//!
//! - [`TodoAction::Create`] appends a record with the next free id
//! - [`TodoAction::Toggle`] flips `done` on the record with a given id
//! - [`TodoAction::Remove`] drops the record with a given id
//!
//! A [`TodosStore`] owns one list for the length of a session. Consumers
//! get a [`TodosStateReader`] or a [`TodosDispatcher`] from it, or use
//! [`use_todos_state`] and [`use_todos_dispatch`]. Handles report
//! "store not initialized" once the store is closed.
//!
//! # Quick Start
//!
//! ```
//! use todos::{use_todos_dispatch, use_todos_state, TodoAction, TodoId, TodosStore};
//!
//! # fn main() -> Result<(), todos::TodosError> {
//! let store = TodosStore::new();
//! let reader = store.state_reader();
//! let dispatch = use_todos_dispatch(&store.dispatcher())?;
//!
//! dispatch(TodoAction::create("Write the docs"))?;
//! dispatch(TodoAction::Remove { id: TodoId::new(2) })?;
//!
//! let todos = use_todos_state(&reader)?;
//! let ids: Vec<u64> = todos.iter().map(|t| t.id.get()).collect();
//! assert_eq!(ids, vec![1, 3, 4]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::TodosError;
pub use reducer::{TodosEnvironment, TodosReducer};
pub use store::{use_todos_dispatch, use_todos_state, TodosDispatcher, TodosStateReader, TodosStore};
pub use types::{Todo, TodoAction, TodoId, TodosState};
