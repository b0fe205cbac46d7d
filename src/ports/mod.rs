//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The match runner and the console front-end only talk to move sources and
//! observers through these traits; concrete adapters live in
//! [`crate::pipeline`] and [`crate::cli`].

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
