use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bracket_engine::{generate, layout, payload, viz, LayoutOptions, ParticipantConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let participants_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .ok_or_else(|| {
            "Usage: bracket-engine <participants.json> [--nodes] [--layout <layout.json>]"
                .to_string()
        })?;
    let nodes_mode = args.iter().any(|a| a == "--nodes");
    let layout_options = match args.iter().position(|a| a == "--layout") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .ok_or_else(|| "--layout requires a file path.".to_string())?;
            layout::load_layout_options(&PathBuf::from(path))?
        }
        None => LayoutOptions::default(),
    };

    let data = fs::read_to_string(&participants_path)
        .map_err(|e| format!("read participants {participants_path}: {e}"))?;
    let participants: Vec<ParticipantConfig> = serde_json::from_str(&data)
        .map_err(|e| format!("parse participants {participants_path}: {e}"))?;
    info!("loaded {} participants from {participants_path}", participants.len());

    let rounds = generate(&participants)?;

    if nodes_mode {
        let positions =
            layout::compute_positions(&rounds, layout_options.x_spacing, layout_options.y_spacing);
        let view = serde_json::json!({
            "nodes": viz::bracket_nodes(&rounds, &positions),
            "edges": viz::bracket_edges(&rounds),
        });
        let out = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let payload = payload::serialize(&rounds);
    if payload.matches.is_empty() {
        return Err("Could not generate bracket payload: no playable matches.".to_string());
    }
    let out = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}
