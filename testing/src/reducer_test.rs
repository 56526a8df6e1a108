//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use club_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A, O> = Box<dyn FnOnce(&[Effect<A, O>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use club_testing::ReducerTest;
///
/// ReducerTest::new(Dispatcher::new())
///     .given_state(club)
///     .when_action(ClubAction::Open)
///     .then_state(|club| {
///         assert_eq!(club.tables_in_use(), 0);
///     })
///     .then_effects(|effects| {
///         assert_eq!(effects.len(), 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    effect_assertions: Vec<EffectAssertion<R::Action, R::Output>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Apply an action before the one under test (Given)
    ///
    /// Its effects are discarded; actions it would feed back are not run.
    #[must_use]
    pub fn given_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Set the action to test (When)
    ///
    /// Only the effects of this last action are checked by
    /// [`then_effects`](Self::then_effects).
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<R::Action, R::Output>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state or action is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "Action must be set with when_action()"
        );

        // Execute reducer; only the final action's effects are kept
        let mut effects = Vec::new();
        for action in self.actions {
            effects = self.reducer.reduce(&mut state, action).into_vec();
        }

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use club_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if any effect does something.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug, O: std::fmt::Debug>(effects: &[Effect<A, O>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A, O>(effects: &[Effect<A, O>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert the outputs emitted directly by the effects, in order
    ///
    /// # Panics
    ///
    /// Panics if the emitted outputs differ from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_emitted<A, O>(effects: &[Effect<A, O>], expected: &[O])
    where
        O: std::fmt::Debug + PartialEq,
    {
        let emitted: Vec<&O> = effects.iter().flat_map(Effect::outputs).collect();
        let expected: Vec<&O> = expected.iter().collect();
        assert_eq!(emitted, expected, "Unexpected emitted outputs");
    }

    /// Assert that effects feed at least one action back into the reducer
    ///
    /// # Panics
    ///
    /// Panics if no `Send` effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_send_effect<A, O>(effects: &[Effect<A, O>]) {
        fn has_send<A, O>(effect: &Effect<A, O>) -> bool {
            match effect {
                Effect::Send(_) => true,
                Effect::Sequential(effects) => effects.iter().any(has_send),
                Effect::None | Effect::Emit(_) => false,
            }
        }

        assert!(
            effects.iter().any(has_send),
            "Expected at least one Send effect, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Announce,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Output = String;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
        ) -> SmallVec<[Effect<Self::Action, Self::Output>; 4]> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::None]
                },
                TestAction::Announce => smallvec![
                    Effect::Emit(format!("count is {}", state.count)),
                    Effect::Send(TestAction::Increment),
                ],
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_given_actions_apply_before_when() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .given_action(TestAction::Increment)
            .given_action(TestAction::Increment)
            .when_action(TestAction::Announce)
            .then_state(|state| {
                // Announce feeds Increment back, but the harness does not run it
                assert_eq!(state.count, 7);
            })
            .then_effects(|effects| {
                assertions::assert_emitted(effects, &["count is 7".to_string()]);
                assertions::assert_has_send_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction, String>(&[Effect::None]);
        assertions::assert_no_effects::<TestAction, String>(&[]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::<TestAction, String>::None], 1);
        assertions::assert_effects_count::<TestAction, String>(&[], 0);
    }
}
