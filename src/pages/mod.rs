//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads shared state from context and hands user input to the
//! state controller as actions.

pub mod todos;
