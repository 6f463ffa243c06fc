//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags, then
//! resolves them into a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::{load, load_with_env};
pub use resolved::ResolvedConfig;
