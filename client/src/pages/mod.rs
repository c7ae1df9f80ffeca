//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session decisions
//! to the `session` crate.

pub mod dashboard;
pub mod login;
