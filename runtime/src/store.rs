use crate::handle::{ActionSink, Dispatcher, StateReader};
use crate::metrics::{
    ACTIONS_TOTAL, FEEDBACK_LIMIT_EXCEEDED, REDUCER_DURATION_SECONDS,
};
use crate::{StoreConfig, StoreError};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock, Weak};
use std::time::Instant;
use todos_core::{action::Action, effect::Effect, reducer::Reducer, SmallVec};
use tokio::sync::broadcast;

/// Everything a store owns; handles point here weakly
pub(crate) struct Shared<S, A, E, R> {
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    config: StoreConfig,
    /// Every applied action, for observers that re-read state on change
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Shared<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: Action + Clone,
{
    /// Apply `action`, then every action its effects dispatch, breadth-first
    #[tracing::instrument(skip(self, action), fields(kind = action.kind()), name = "store_send")]
    fn dispatch(&self, action: A) -> Result<(), StoreError> {
        let limit = self.config.max_feedback_depth;
        let mut queue = VecDeque::from([(action, 0_usize)]);

        while let Some((action, depth)) = queue.pop_front() {
            for effect in self.apply(action) {
                for next in effect.into_actions() {
                    if depth >= limit {
                        tracing::warn!(
                            limit,
                            next = next.kind(),
                            "Effect feedback limit reached, dropping remaining actions"
                        );
                        metrics::counter!(FEEDBACK_LIMIT_EXCEEDED).increment(1);
                        return Err(StoreError::FeedbackLimitExceeded(limit));
                    }
                    queue.push_back((next, depth + 1));
                }
            }
        }

        Ok(())
    }

    /// Run the reducer for one action under the write lock
    fn apply(&self, action: A) -> SmallVec<[Effect<A>; 4]> {
        let kind = action.kind();
        tracing::debug!(kind, "Processing action");
        metrics::counter!(ACTIONS_TOTAL, "kind" => kind).increment(1);

        let observed = (self.action_broadcast.receiver_count() > 0).then(|| action.clone());

        let effects = {
            // A reducer that panicked left state either untouched or fully replaced
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            tracing::trace!("Acquired write lock on state");

            let start = Instant::now();
            let effects = self.reducer.reduce(&mut *state, action, &self.environment);
            metrics::histogram!(REDUCER_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

            // Sent before the guard drops so broadcast order is application order
            if let Some(action) = observed {
                // No receivers left is fine; nobody is watching
                let _ = self.action_broadcast.send(action);
            }

            effects
        };

        tracing::trace!("Reducer completed, returned {} effects", effects.len());
        effects
    }
}

impl<S, A, E, R> ActionSink<A> for Shared<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
    A: Action + Clone + Send,
    S: Send + Sync,
    E: Send + Sync,
{
    fn send(&self, action: A) -> Result<(), StoreError> {
        self.dispatch(action)
    }
}

/// The Store - owner of one state scope
///
/// The Store manages:
/// 1. State (behind a `RwLock` so handles are `Send + Sync`)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Synchronous execution of effects that dispatch further actions
///
/// Creating a store opens its scope; [`Store::close`] or dropping it ends
/// the scope. [`StateReader`] and [`Dispatcher`] handles taken from the
/// store fail with [`StoreError::NotInitialized`] afterwards.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R> {
    shared: Arc<Shared<S, A, E, R>>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Action + Clone + Send + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Uses [`StoreConfig::default`].
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));
        tracing::debug!(?config, "Store scope opened");

        Self {
            shared: Arc::new(Shared {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                config,
                action_broadcast,
            }),
        }
    }

    /// Send an action to the store
    ///
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Releases the lock, then applies actions dispatched by the
    ///    returned effects the same way
    ///
    /// Readers only ever observe state between two reducer calls.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FeedbackLimitExceeded`] if effects dispatch
    /// actions nested deeper than [`StoreConfig::max_feedback_depth`].
    ///
    /// # Panics
    ///
    /// If the reducer panics, the panic propagates to the caller.
    pub fn send(&self, action: A) -> Result<(), StoreError> {
        self.shared.dispatch(action)
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.items.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.shared.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&*state)
    }

    /// Hand out a read-only handle bound to this store's scope
    #[must_use]
    pub fn state_reader(&self) -> StateReader<S> {
        StateReader::new(Arc::downgrade(&self.shared.state))
    }

    /// Hand out a dispatch handle bound to this store's scope
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<A> {
        let shared: Weak<Shared<S, A, E, R>> = Arc::downgrade(&self.shared);
        Dispatcher::new(shared)
    }

    /// Subscribe to every action applied from now on
    ///
    /// Actions dispatched by effects are included, in application order.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.shared.action_broadcast.subscribe()
    }

    /// The configuration this store was created with
    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.shared.config
    }

    /// End this store's scope
    ///
    /// State is discarded and all handles start failing with
    /// [`StoreError::NotInitialized`]. Subscribers see their channel close.
    pub fn close(self) {
        drop(self);
    }
}

impl<S, A, E, R> Drop for Store<S, A, E, R> {
    fn drop(&mut self) {
        tracing::debug!("Store scope closed");
    }
}

impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.shared.config)
            .field("subscribers", &self.shared.action_broadcast.receiver_count())
            .finish_non_exhaustive()
    }
}
