//! Native preview tooling for pagekit site configurations.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `plan` and `lint`
//! - [`summary`] - Text renderers for the built-in section types

pub mod cli;
pub mod commands;
pub mod summary;
