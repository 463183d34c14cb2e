//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of records. The list itself is an
//! immutable `Arc<[Todo]>`: every command that changes it builds a new
//! list, so snapshots handed out earlier never change underneath a reader.

use crate::error::TodosError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use todos_core::action::Action;
use todos_macros::Action;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id given to the first record of an empty list
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from a raw number
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw number
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` if the id space is exhausted
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, fixed once assigned
    pub id: TodoId,
    /// Label text
    pub text: String,
    /// Whether the todo is done
    pub done: bool,
}

impl Todo {
    /// Creates a new, not yet done, todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Returns a copy with `done` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// State of the to-do list
///
/// Ids are pairwise distinct in every value of this type: constructors
/// reject duplicates and the reducer only ever appends fresh ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Todo>", into = "Vec<Todo>")]
pub struct TodosState {
    pub(crate) todos: Arc<[Todo]>,
}

impl TodosState {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self {
            todos: Arc::from([]),
        }
    }

    /// The list every new store starts with
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            todos: Arc::from([
                Todo {
                    id: TodoId(1),
                    text: "Learn the Context API".to_string(),
                    done: true,
                },
                Todo {
                    id: TodoId(2),
                    text: "Learn TypeScript".to_string(),
                    done: true,
                },
                Todo {
                    id: TodoId(3),
                    text: "Use TypeScript with the Context API".to_string(),
                    done: false,
                },
            ]),
        }
    }

    /// Creates a list from explicit records, in the given order
    ///
    /// # Errors
    ///
    /// Returns [`TodosError::DuplicateId`] if two records share an id.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, TodosError> {
        let mut seen = HashSet::with_capacity(todos.len());
        if let Some(duplicate) = todos.iter().find(|todo| !seen.insert(todo.id)) {
            return Err(TodosError::DuplicateId(duplicate.id));
        }

        Ok(Self {
            todos: todos.into(),
        })
    }

    /// Creates a list from a JSON array of `{"id", "text", "done"}` records
    ///
    /// # Errors
    ///
    /// Returns [`TodosError::InvalidSeed`] if the JSON does not describe a
    /// list of records, or [`TodosError::DuplicateId`] if ids repeat.
    pub fn from_json(json: &str) -> Result<Self, TodosError> {
        let todos: Vec<Todo> = serde_json::from_str(json).map_err(TodosError::InvalidSeed)?;
        Self::from_todos(todos)
    }

    /// Records in display order
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// A shared, immutable snapshot of the current list
    #[must_use]
    pub fn snapshot(&self) -> Arc<[Todo]> {
        Arc::clone(&self.todos)
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of done todos
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// The id a newly created todo would get
    ///
    /// One past the largest id in the list, or [`TodoId::FIRST`] for an
    /// empty list. `None` once the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) => max.next(),
            None => Some(TodoId::FIRST),
        }
    }
}

impl Default for TodosState {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Todo>> for TodosState {
    type Error = TodosError;

    fn try_from(todos: Vec<Todo>) -> Result<Self, Self::Error> {
        Self::from_todos(todos)
    }
}

impl From<TodosState> for Vec<Todo> {
    fn from(state: TodosState) -> Self {
        state.todos.to_vec()
    }
}

/// Commands accepted by the to-do store
///
/// Serialized with a `type` tag, e.g. `{"type":"TOGGLE","id":3}`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new todo with the next free id
    Create {
        /// Label text
        text: String,
    },

    /// Flip `done` on the matching todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Drop the matching todo from the list
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}

impl TodoAction {
    /// Reported as the kind of an untyped command with no string `type` tag
    pub const MISSING_TYPE: &'static str = "<missing type>";

    /// Shorthand for [`TodoAction::Create`]
    #[must_use]
    pub fn create(text: impl Into<String>) -> Self {
        Self::Create { text: text.into() }
    }

    /// Decodes an untyped command such as `{"type":"CREATE","text":"..."}`
    ///
    /// # Errors
    ///
    /// - [`TodosError::UnhandledAction`] if the `type` tag is not one of
    ///   [`Action::KINDS`], or [`TodoAction::MISSING_TYPE`] if it is absent
    /// - [`TodosError::MalformedAction`] if the input is not JSON or a known
    ///   command is missing its fields
    pub fn from_json(json: &str) -> Result<Self, TodosError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(TodosError::MalformedAction)?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        match kind {
            Some(kind) if Self::KINDS.contains(&kind.as_str()) => {
                serde_json::from_value(value).map_err(TodosError::MalformedAction)
            },
            Some(kind) => Err(TodosError::UnhandledAction(kind)),
            None => Err(TodosError::UnhandledAction(Self::MISSING_TYPE.to_string())),
        }
    }
}
