//! Host module for process execution

pub mod command_runner;

pub use command_runner::{CommandOptions, CommandRunner};
