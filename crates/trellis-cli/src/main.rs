use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use trellis_api::FigmaClient;
use trellis_cli::{cli::Cli, writer};
use trellis_codegen::{emit_component, extract_frames};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let env_filter = format!("trellis_cli={log_level},trellis_api={log_level}");
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    let client = FigmaClient::with_base_url(&args.token, &args.base_url);

    let file = client
        .fetch_file(&args.file_key)
        .await
        .context("failed to fetch design file")?;
    info!("Fetched design document: {}", file.name);

    let frames = extract_frames(&file.document);
    if frames.is_empty() {
        warn!("no frames found in the document, nothing to generate");
        return Ok(());
    }
    info!("Found {} frames", frames.len());

    let ids: Vec<String> = frames.iter().map(|frame| frame.id.clone()).collect();
    let details = client
        .fetch_nodes(&args.file_key, &ids)
        .await
        .context("failed to fetch node details")?;

    for frame in &frames {
        let Some(detail) = details.nodes.get(&frame.id) else {
            warn!(
                "no detail returned for frame {} ({}), skipping",
                frame.id, frame.name
            );
            continue;
        };

        let bundle = emit_component(&detail.document);
        info!("Generating component: {}", bundle.component_name);
        let dir = writer::write_bundle(&args.out, &bundle)
            .with_context(|| format!("failed to write component {}", bundle.component_name))?;
        info!("Wrote {}", dir.display());
    }

    info!("Done, components written to {}", args.out.display());
    Ok(())
}
