//! Client-side identifier generation.

use crate::errors::CoreError;

/// Number of random bytes behind a generated id.
const ID_BYTES: usize = 16;

/// Generate a random 32-character lowercase hex id.
///
/// # Errors
///
/// Returns [`CoreError::IdGeneration`] if the OS random source fails.
pub fn random_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
