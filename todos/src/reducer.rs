//! Reducer logic for the to-do list.
//!
//! Every command builds the next list from the current one and swaps it in
//! whole. Commands that match nothing leave the current list in place.

use crate::types::{Todo, TodoAction, TodoId, TodosState};
use todos_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Environment dependencies for the to-do reducer
///
/// The list needs no injected services; the type exists so the store has
/// a concrete environment to hand the reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosEnvironment;

/// Reducer for the to-do list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn create(state: &mut TodosState, text: String) {
        let Some(id) = state.next_id() else {
            tracing::warn!("Todo id space exhausted, ignoring create");
            return;
        };

        let mut todos = Vec::with_capacity(state.len() + 1);
        todos.extend_from_slice(state.todos());
        todos.push(Todo::new(id, text));
        state.todos = todos.into();

        tracing::debug!(%id, "Todo created");
    }

    fn toggle(state: &mut TodosState, id: TodoId) {
        if !state.contains(id) {
            tracing::trace!(%id, "Toggle matched no todo");
            return;
        }

        state.todos = state
            .todos()
            .iter()
            .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
            .collect();
    }

    fn remove(state: &mut TodosState, id: TodoId) {
        if !state.contains(id) {
            tracing::trace!(%id, "Remove matched no todo");
            return;
        }

        state.todos = state
            .todos()
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect();
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodoAction;
    type Environment = TodosEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Create { text } => Self::create(state, text),
            TodoAction::Toggle { id } => Self::toggle(state, id),
            TodoAction::Remove { id } => Self::remove(state, id),
        }

        SmallVec::new()
    }
}
