//! # Club Runtime
//!
//! Runtime implementation for the reducer architecture.
//!
//! This crate provides the [`Store`] that owns state, feeds actions to a
//! reducer and executes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Exclusive owner of the state for one run
//! - **Effect Executor**: Executes effect descriptions in order, feeding
//!   actions back into the reducer depth-first
//!
//! Execution is synchronous. A store is driven by exactly one owner, so no
//! locking is involved; independent stores share nothing and can be run on
//! separate threads without coordination.
//!
//! ## Example
//!
//! ```ignore
//! use club_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer);
//!
//! // Send an action and collect what it emitted
//! let outputs = store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use club_core::{effect::Effect, reducer::Reducer};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A chain of `Effect::Send` actions went deeper than allowed
        ///
        /// This indicates a reducer that keeps feeding actions back to
        /// itself. Outputs emitted before the limit was hit are discarded.
        #[error("Feedback chain exceeded {limit} nested actions")]
        FeedbackLimitExceeded {
            /// Configured maximum depth
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for a [`Store`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum nesting of actions fed back through `Effect::Send`
    pub max_feedback_depth: usize,
}

impl StoreConfig {
    /// Set the maximum feedback depth
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_depth: 32,
        }
    }
}

/// The Store - runtime coordinator for a reducer
///
/// # Type Parameters
///
/// - `R`: Reducer implementation; state, action and output types follow
///   from it
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(Club::new(config), Dispatcher::new());
///
/// let log = store.send(ClubAction::Open)?;
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    state: R::State,
    reducer: R,
    config: StoreConfig,
}

impl<R> Store<R>
where
    R: Reducer,
{
    /// Create a new store with initial state and reducer
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self::with_config(initial_state, reducer, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    #[must_use]
    pub const fn with_config(initial_state: R::State, reducer: R, config: StoreConfig) -> Self {
        Self {
            state: initial_state,
            reducer,
            config,
        }
    }

    /// Send an action through the reducer and execute its effects
    ///
    /// Returns every output emitted while processing the action, including
    /// outputs of actions fed back through `Effect::Send`, in execution
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FeedbackLimitExceeded`] if fed-back actions nest
    /// deeper than [`StoreConfig::max_feedback_depth`].
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: R::Action) -> Result<Vec<R::Output>, StoreError> {
        let mut outputs = Vec::new();
        self.send_into(action, &mut outputs)?;
        Ok(outputs)
    }

    /// Send an action, appending its outputs to `outputs`
    ///
    /// On error, `outputs` is left as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FeedbackLimitExceeded`] if fed-back actions nest
    /// deeper than [`StoreConfig::max_feedback_depth`].
    pub fn send_into(
        &mut self,
        action: R::Action,
        outputs: &mut Vec<R::Output>,
    ) -> Result<(), StoreError> {
        let mark = outputs.len();
        let result = self.dispatch(action, 0, outputs);
        if result.is_err() {
            outputs.truncate(mark);
        }
        result
    }

    /// Read current state via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        f(&self.state)
    }

    /// Consume the store and return its state
    #[must_use]
    pub fn into_state(self) -> R::State {
        self.state
    }

    fn dispatch(
        &mut self,
        action: R::Action,
        depth: usize,
        outputs: &mut Vec<R::Output>,
    ) -> Result<(), StoreError> {
        tracing::trace!(depth, "Processing action");
        metrics::counter!("store.actions.total").increment(1);

        let effects = self.reducer.reduce(&mut self.state, action);

        tracing::trace!("Reducer completed, returned {} effects", effects.len());
        // Effect counts are tiny; precision loss is irrelevant here
        #[allow(clippy::cast_precision_loss)]
        metrics::histogram!("store.effects.count").record(effects.len() as f64);

        for effect in effects {
            self.execute_effect(effect, depth, outputs)?;
        }
        Ok(())
    }

    fn execute_effect(
        &mut self,
        effect: Effect<R::Action, R::Output>,
        depth: usize,
        outputs: &mut Vec<R::Output>,
    ) -> Result<(), StoreError> {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
            },
            Effect::Emit(output) => {
                tracing::trace!("Executing Effect::Emit");
                outputs.push(output);
            },
            Effect::Send(action) => {
                let next = depth + 1;
                if next > self.config.max_feedback_depth {
                    tracing::warn!(
                        limit = self.config.max_feedback_depth,
                        "Feedback chain too deep, aborting action"
                    );
                    return Err(StoreError::FeedbackLimitExceeded {
                        limit: self.config.max_feedback_depth,
                    });
                }
                tracing::trace!("Executing Effect::Send, feeding action back");
                self.dispatch(action, next, outputs)?;
            },
            Effect::Sequential(effects) => {
                tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect, depth, outputs)?;
                }
            },
        }
        Ok(())
    }
}

impl<R> std::fmt::Debug for Store<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
