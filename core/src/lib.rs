//! # Club Core
//!
//! Core traits and types for the reducer architecture the club simulation is
//! built on.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a single store
//! - **Action**: All possible inputs to a reducer (incoming events and
//!   follow-up actions fed back by effects)
//! - **Reducer**: `(State, Action) → (State, Effects)`
//! - **Effect**: Description of what should happen next (emit an output,
//!   feed an action back), never execution
//!
//! The runtime owns the state and executes effects in the order they were
//! returned, so a reducer fully controls the order of its outputs.
//!
//! ## Example
//!
//! ```
//! use club_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! struct Tally;
//!
//! impl Reducer for Tally {
//!     type State = u32;
//!     type Action = u32;
//!     type Output = String;
//!
//!     fn reduce(&self, state: &mut u32, action: u32) -> SmallVec<[Effect<u32, String>; 4]> {
//!         *state += action;
//!         smallvec![Effect::Emit(format!("total {state}"))]
//!     }
//! }
//!
//! let mut total = 0;
//! let effects = Tally.reduce(&mut total, 3);
//! assert_eq!(total, 3);
//! assert_eq!(effects.len(), 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic functions: `(State, Action) → (State, Effects)`.
/// All decisions live here; the store only executes what the reducer returns.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Output`: The values this reducer emits to the outside world
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The output type emitted through [`Effect::Emit`]
        type Output;

        /// Reduce an action into state changes and effects
        ///
        /// This is a deterministic function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed, in order
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
        ) -> SmallVec<[Effect<Self::Action, Self::Output>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe what the runtime should do after a reducer returns.
/// They are values, not execution, and compose with [`Effect::chain`].
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: Actions that can be fed back into the reducer
    /// - `Output`: Values handed to whoever consumes the store's output
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action, Output> {
        /// No-op effect
        None,

        /// Hand a value to the output consumer
        Emit(Output),

        /// Feed an action back into the reducer before any later effect runs
        Send(Action),

        /// Run effects one after another
        Sequential(Vec<Effect<Action, Output>>),
    }

    impl<Action, Output> Effect<Action, Output> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Returns `true` for [`Effect::None`] and empty sequences
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
                Self::Emit(_) | Self::Send(_) => false,
            }
        }

        /// Collects every emitted output, depth-first, in execution order
        ///
        /// Actions fed back through [`Effect::Send`] are not followed; this
        /// only looks at what this effect itself emits.
        #[must_use]
        pub fn outputs(&self) -> Vec<&Output> {
            let mut outputs = Vec::new();
            self.collect_outputs(&mut outputs);
            outputs
        }

        fn collect_outputs<'a>(&'a self, outputs: &mut Vec<&'a Output>) {
            match self {
                Self::Emit(output) => outputs.push(output),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_outputs(outputs);
                    }
                },
                Self::None | Self::Send(_) => {},
            }
        }
    }
}
