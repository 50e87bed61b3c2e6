//! `ff-replay`: drive an editor session from a scripted event log.
//!
//! Reads a JSON array of script entries (drag events, connect clicks, key
//! presses, undo/redo), replays them against a fresh session, and writes
//! the exported workflow document.

mod script;

use anyhow::{Context, Result};
use clap::Parser;
use ff_core::StepCatalog;
use ff_editor::{EditorConfig, EditorSession};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ff-replay", version, about = "Replay canvas gestures and export the workflow")]
struct Args {
    /// JSON script of events to replay.
    #[arg(short, long)]
    script: PathBuf,

    /// Editor configuration (TOML). Defaults apply when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template catalog (JSON array). The built-in catalog when absent.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from_file(path),
        None => EditorConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            StepCatalog::from_json(&text)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => StepCatalog::builtin(),
    };

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let entries = script::parse(&text)
        .with_context(|| format!("parsing script {}", args.script.display()))?;

    let mut session = EditorSession::new(catalog, config);
    let saved = script::replay(&mut session, &entries);
    log::info!("replayed {} entries", entries.len());

    // An explicit save in the script wins; otherwise export the final state.
    let document = saved.unwrap_or_else(|| session.export());
    let json = document.to_json_pretty()?;
    match &args.output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
