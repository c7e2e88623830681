//! Decode command — turn an embedded base64 payload back into its text.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::domain::render::decode;
use crate::output::json::format_value;

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// Base64 payload, e.g. a `SYSCTL_CONTENT` value from provision.env
    pub payload: String,
}

/// Run the decode command.
///
/// # Errors
///
/// Returns an error if the payload is not base64 or not UTF-8 text.
pub fn run(app: &AppContext, args: &DecodeArgs) -> Result<()> {
    let content = decode(&args.payload).context("decoding payload")?;

    if app.is_json() {
        let obj = serde_json::json!({ "content": content });
        println!("{}", format_value(&obj)?);
    } else if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
    Ok(())
}
