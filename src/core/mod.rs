//! Core library components.
//!
//! The vault decryption engine, the dotenv codec it relies on, and the
//! loading layer that applies decrypted variables to an environment.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
pub mod key;
pub mod load;
pub mod rotation;
pub mod types;
pub mod vault;

#[cfg(test)]
pub(crate) mod testing;
