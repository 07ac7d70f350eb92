//! dotenv-vault - Decrypt `.env.vault` files into environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with decrypted variables
//! │   ├── read          # Print decrypted variables
//! │   ├── check         # Verify a vault decrypts
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── key           # DOTENV_KEY url parsing and key sets
//!     ├── cipher        # AES-GCM vault field decryption
//!     ├── rotation      # First-success decryption across keys
//!     ├── vault         # .env.vault container and decryption pipeline
//!     ├── env           # dotenv codec
//!     ├── config        # Configuration sources and environments
//!     └── load          # Read / load / overload / exec
//! ```
//!
//! # Example
//!
//! ```no_run
//! // Decrypts .env.vault when DOTENV_KEY is set, reads .env otherwise.
//! dotenv_vault::load::<&str>(&[])?;
//! # Ok::<(), dotenv_vault::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{Environment, MemoryEnv, ProcessEnv, Source};
pub use crate::core::env::{marshal, parse as unmarshal, parse_bytes as unmarshal_bytes, write};
pub use crate::core::load::{
    exec, exec_with, load, load_with, overload, overload_with, read, read_with, Strategy,
};
pub use crate::core::types::EnvMap;
pub use crate::core::vault::{parse, parse_with, Vault};
pub use crate::error::{Error, Result};
