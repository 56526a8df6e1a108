//! # Club Testing
//!
//! Testing utilities and helpers for reducers built on `club-core`.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for a single reducer step
//! - [`assertions`]: Helpers for checking returned effects
//!
//! ## Example
//!
//! ```ignore
//! use club_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(Dispatcher::new())
//!     .given_state(club)
//!     .when_action(ClubAction::Incoming(event))
//!     .then_state(|club| assert_eq!(club.tables_in_use(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
