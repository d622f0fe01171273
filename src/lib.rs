//! agenthooks library.
//!
//! Git `commit-msg` and `pre-commit` hooks that hand their decisions to an
//! AI agent.

pub mod agent;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;

pub use config::Config;
pub use error::Error;
