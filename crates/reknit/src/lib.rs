//! # reknit
//!
//! Rule-based construction of biochemical reaction networks.
//!
//! This crate re-exports the main functionality from its member crates.

pub mod pattern {
    pub use ::rk_pattern::*;
}

pub mod rules {
    pub use ::rk_rules::*;
}
