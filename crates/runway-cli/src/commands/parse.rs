//! Smart import message parsing command

use anyhow::Result;
use runway_core::smart_import::{interpret_message, ImportOutcome};

/// Print the JSON outcome for one message; a missing amount is not an error
pub fn cmd_parse(message: &str) -> Result<()> {
    let outcome = match interpret_message(message) {
        Ok(parsed) => {
            tracing::debug!(description = %parsed.description, "Parsed message");
            ImportOutcome::imported(&parsed)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Message not understood");
            ImportOutcome::failed("Could not detect amount")
        }
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
