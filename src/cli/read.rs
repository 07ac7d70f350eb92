//! Read command.
//!
//! Prints decrypted variables as dotenv text or JSON.

use std::path::PathBuf;

use crate::core::config::Source;
use crate::core::{env, load};
use crate::error::Result;

/// Print the decrypted variables from the given files.
pub fn execute<S: Source>(source: &S, files: &[PathBuf], json: bool) -> Result<()> {
    let vars = load::read_with(source, files)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&vars)?);
    } else if !vars.is_empty() {
        println!("{}", env::marshal(&vars));
    }

    Ok(())
}
