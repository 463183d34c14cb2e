//! The to-do store scope and its consumer-facing accessors.
//!
//! A [`TodosStore`] is one independent session. Everything that needs the
//! list gets a [`TodosStateReader`] or a [`TodosDispatcher`] from it; both
//! stop working once the store is closed.

use crate::error::TodosError;
use crate::reducer::{TodosEnvironment, TodosReducer};
use crate::types::{Todo, TodoAction, TodosState};
use std::sync::Arc;
use todos_runtime::{Dispatcher, StateReader, Store, StoreConfig};
use tokio::sync::broadcast;

/// Read-only handle to a to-do list
pub type TodosStateReader = StateReader<TodosState>;

/// Command handle for a to-do list
pub type TodosDispatcher = Dispatcher<TodoAction>;

/// One to-do list session
///
/// # Example
///
/// ```
/// use todos::{TodoAction, TodoId, TodosStore};
///
/// let store = TodosStore::new();
/// let dispatcher = store.dispatcher();
///
/// dispatcher.send(TodoAction::create("D")).unwrap();
/// dispatcher.send(TodoAction::Toggle { id: TodoId::new(3) }).unwrap();
///
/// let todos = store.todos();
/// assert_eq!(todos.len(), 4);
/// assert!(todos[2].done);
///
/// store.close();
/// assert!(dispatcher.send(TodoAction::create("E")).is_err());
/// ```
#[derive(Debug)]
pub struct TodosStore {
    store: Store<TodosState, TodoAction, TodosEnvironment, TodosReducer>,
}

impl TodosStore {
    /// Opens a session holding the three seed todos
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TodosState::seeded())
    }

    /// Opens a session holding `state`
    #[must_use]
    pub fn with_state(state: TodosState) -> Self {
        Self::with_config(state, StoreConfig::default())
    }

    /// Opens a session holding `state` with custom runtime configuration
    #[must_use]
    pub fn with_config(state: TodosState, config: StoreConfig) -> Self {
        tracing::info!(todos = state.len(), "Opening todo store");
        Self {
            store: Store::with_config(state, TodosReducer::new(), TodosEnvironment, config),
        }
    }

    /// Hand out a read-only handle bound to this session
    #[must_use]
    pub fn state_reader(&self) -> TodosStateReader {
        self.store.state_reader()
    }

    /// Hand out a command handle bound to this session
    #[must_use]
    pub fn dispatcher(&self) -> TodosDispatcher {
        self.store.dispatcher()
    }

    /// Current list snapshot
    #[must_use]
    pub fn todos(&self) -> Arc<[Todo]> {
        self.store.state(TodosState::snapshot)
    }

    /// Read the current state via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodosState) -> T,
    {
        self.store.state(f)
    }

    /// Apply a command
    ///
    /// # Errors
    ///
    /// Propagates runtime errors as [`TodosError::Store`].
    pub fn dispatch(&self, action: TodoAction) -> Result<(), TodosError> {
        Ok(self.store.send(action)?)
    }

    /// Decode and apply an untyped command
    ///
    /// # Errors
    ///
    /// See [`TodoAction::from_json`]; nothing is applied on error.
    pub fn dispatch_json(&self, json: &str) -> Result<(), TodosError> {
        let action = TodoAction::from_json(json)?;
        self.dispatch(action)
    }

    /// Subscribe to every command applied from now on
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TodoAction> {
        self.store.subscribe_actions()
    }

    /// End this session; all handles start failing
    pub fn close(self) {
        tracing::info!("Closing todo store");
        self.store.close();
    }
}

impl Default for TodosStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the current list through a handle
///
/// # Errors
///
/// Returns a [`TodosError::Store`] "store not initialized" error if the
/// handle's session has ended.
pub fn use_todos_state(reader: &TodosStateReader) -> Result<Arc<[Todo]>, TodosError> {
    Ok(reader.read(TodosState::snapshot)?)
}

/// Turn a handle into a plain dispatch function
///
/// # Errors
///
/// Returns a [`TodosError::Store`] "store not initialized" error if the
/// handle's session has already ended. The returned function reports the
/// same error if the session ends later.
pub fn use_todos_dispatch(
    dispatcher: &TodosDispatcher,
) -> Result<impl Fn(TodoAction) -> Result<(), TodosError> + Send + Sync + 'static, TodosError> {
    if !dispatcher.is_live() {
        return Err(todos_runtime::StoreError::NotInitialized.into());
    }

    let dispatcher = dispatcher.clone();
    Ok(move |action| dispatcher.send(action).map_err(TodosError::from))
}
