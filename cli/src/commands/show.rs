//! Show command — print one rendered artifact to stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ConfigSource;
use crate::application::services::render_bundle::render_artifact;
use crate::domain::ArtifactKind;
use crate::infra::config::FileConfigSource;
use crate::output::json::format_value;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Artifact to print: sysctl, ulimit, containerd, kubenet-template, environment
    pub kind: ArtifactKind,

    /// Node configuration (JSON or YAML). Falls back to `NODE_BOOTSTRAPPER_CONFIG`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the base64 payload instead of the plain text
    #[arg(long)]
    pub encoded: bool,
}

/// Run the show command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved or loaded.
pub fn run(app: &AppContext, args: ShowArgs) -> Result<()> {
    let config = FileConfigSource::resolve(args.config)?.load()?;
    let artifact = render_artifact(&config, args.kind);
    let content = if args.encoded {
        artifact.encoded()
    } else {
        artifact.text.clone()
    };

    if app.is_json() {
        let obj = serde_json::json!({
            "kind": artifact.kind,
            "path": artifact.node_path(),
            "sha256": artifact.sha256(),
            "encoded": args.encoded,
            "content": content,
        });
        println!("{}", format_value(&obj)?);
    } else if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
    Ok(())
}
