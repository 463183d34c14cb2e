//! # Todos Core
//!
//! Core traits and types for reducer-driven state containers.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as values, executed by the runtime
//! - **Environment**: Injected dependencies
//!
//! ## Example
//!
//! ```
//! use todos_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Action module - naming for reducer inputs
///
/// Actions are the only way state changes. The [`Action`](action::Action)
/// trait gives every action a stable kind name that the runtime uses for
/// logs and metric labels. It is usually derived with
/// `#[derive(Action)]` from `todos-macros`.
pub mod action {
    /// A reducer input with a stable, human-readable kind name
    ///
    /// # Example
    ///
    /// ```
    /// use todos_core::action::Action;
    ///
    /// enum LightAction {
    ///     SwitchOn,
    ///     SwitchOff,
    /// }
    ///
    /// impl Action for LightAction {
    ///     const KINDS: &'static [&'static str] = &["SWITCH_ON", "SWITCH_OFF"];
    ///
    ///     fn kind(&self) -> &'static str {
    ///         match self {
    ///             Self::SwitchOn => "SWITCH_ON",
    ///             Self::SwitchOff => "SWITCH_OFF",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LightAction::SwitchOn.kind(), "SWITCH_ON");
    /// assert!(LightAction::KINDS.contains(&LightAction::SwitchOff.kind()));
    /// ```
    pub trait Action {
        /// Every kind name this type can report, in declaration order
        const KINDS: &'static [&'static str];

        /// Returns the kind name of this action
        fn kind(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Computes the next state from the current state and the action
        /// 2. Stores it in `state`
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// Implementations must leave `state` either untouched or fully
        /// updated; the runtime exposes whatever is in `state` on return.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - follow-up work descriptions
///
/// Effects are values returned from reducers. The runtime executes them
/// synchronously after the reducer returns.
pub mod effect {
    /// Effect type - describes follow-up work for the runtime
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the store once the current one is applied
        Dispatch(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the store
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flattens this effect into the actions it dispatches, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, out: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Dispatch(action) => out.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(out);
                    }
                },
            }
        }
    }
}
