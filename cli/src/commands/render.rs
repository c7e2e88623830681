//! Render command — write the full artifact bundle to a directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::ports::ArtifactWriter;
use crate::application::services::render_bundle::render_to_dir;
use crate::domain::ManifestEntry;
use crate::infra::config::FileConfigSource;
use crate::output::json::format_value;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Node configuration (JSON or YAML). Falls back to `NODE_BOOTSTRAPPER_CONFIG`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that receives the node file tree and `manifest.json`
    #[arg(short, long)]
    pub output_dir: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderReport<'a> {
    output_dir: String,
    artifacts: &'a [ManifestEntry],
}

/// Run the render command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved or loaded, or
/// if any file cannot be written.
pub async fn run(app: &AppContext, args: RenderArgs, writer: &impl ArtifactWriter) -> Result<()> {
    let source = FileConfigSource::resolve(args.config)?;
    let outcome = render_to_dir(&source, writer, &args.output_dir).await?;

    if app.is_json() {
        let report = RenderReport {
            output_dir: args.output_dir.display().to_string(),
            artifacts: &outcome.manifest,
        };
        println!("{}", format_value(&report)?);
        return Ok(());
    }

    app.output.header(&format!(
        "Rendered {} artifacts into {}",
        outcome.manifest.len(),
        args.output_dir.display()
    ));
    for entry in &outcome.manifest {
        app.output.artifact(entry.kind.as_str(), entry.path);
    }
    app.output.success("manifest.json written");
    Ok(())
}
