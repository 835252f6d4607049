//! # tgpost Config
//!
//! Type-safe configuration management for tgpost.
//!
//! Configuration is read once at start-up from a TOML file, overridden from the
//! environment, validated, and then passed by value to every component.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
