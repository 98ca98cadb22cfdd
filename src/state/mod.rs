//! View state and the controller that drives it.
//!
//! ARCHITECTURE
//! ============
//! `todos` holds the state struct and its pure update function. `controller`
//! runs the network commands an update asks for and feeds the outcomes back
//! in as actions.

pub mod controller;
pub mod todos;
