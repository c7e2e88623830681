//! Version command

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json::format_value;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if app.is_json() {
        println!("{}", format_value(&serde_json::json!({ "version": version }))?);
    } else {
        println!("node-bootstrapper {version}");
    }
    Ok(())
}
