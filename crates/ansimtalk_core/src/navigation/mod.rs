//! Named-route navigation state.
//!
//! # Responsibility
//! - Define the closed set of app destinations.
//! - Track the back stack and expose the current route for tab highlighting.
//!
//! # Invariants
//! - The start destination (`home`) is always at the bottom of the stack.
//! - The stack is never empty.

pub mod navigator;
pub mod route;
