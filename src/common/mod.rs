//! Common types, traits, and error definitions
//!
//! This module provides the foundational building blocks shared by the
//! planner, the sampler and the visualization layer.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
