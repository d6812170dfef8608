//! Open files, folders and applications by short, user-chosen aliases.
//!
//! Aliases live in `~/.opnrc`, one `name=target` per line.

pub mod config;
pub mod error;
pub mod launcher;
pub mod locate;
pub mod opener;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use opener::{OpenCommand, Opener, SystemOpener};
pub use store::{AliasStore, Aliases};
