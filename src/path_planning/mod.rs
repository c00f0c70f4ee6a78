// Path Planning algorithms module

pub mod dubins;

pub use dubins::*;
