//! Command-line surface: input reading and command implementations.

pub mod commands;
pub mod input;

pub use input::{read_input, NetworkInput};
