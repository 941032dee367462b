//!
//! layouts/mod.rs
//!
//! One module per supported layout.
//!

pub mod uk105;
pub mod us104;

pub use uk105::Uk105Key;
pub use us104::Us104Key;
