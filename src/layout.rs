use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::types::{LayoutOptions, MatchId, NodePosition, Round};

/// Compute a 2-D position for every match, keyed by match id.
///
/// Round 1 stacks matches vertically in stored order. Every later match
/// sits one column to the right, centered on the average y of its source
/// matches. Sources without a recorded position fall back to an
/// index-derived y so rendering never aborts.
pub fn compute_positions(
    rounds: &[Round],
    x_spacing: f64,
    y_spacing: f64,
) -> HashMap<MatchId, NodePosition> {
    let mut positions: HashMap<MatchId, NodePosition> = HashMap::new();
    let Some(first_round) = rounds.first() else {
        return positions;
    };

    for (i, m) in first_round.iter().enumerate() {
        positions.insert(m.id, NodePosition { x: 0.0, y: i as f64 * y_spacing });
    }

    for (r, round) in rounds.iter().enumerate().skip(1) {
        for (i, m) in round.iter().enumerate() {
            let x = r as f64 * x_spacing;
            let fallback_y = i as f64 * y_spacing;
            if m.source_ids.is_empty() {
                positions.insert(m.id, NodePosition { x, y: fallback_y });
                continue;
            }
            let source_ys: Vec<f64> = m
                .source_ids
                .iter()
                .filter_map(|id| positions.get(id))
                .map(|p| p.y)
                .collect();
            let y = if source_ys.is_empty() {
                fallback_y
            } else {
                source_ys.iter().sum::<f64>() / source_ys.len() as f64
            };
            positions.insert(m.id, NodePosition { x, y });
        }
    }

    positions
}

/// Load layout spacing from a JSON file, falling back to defaults when
/// the file does not exist.
pub fn load_layout_options(path: &Path) -> Result<LayoutOptions, String> {
    if !path.is_file() {
        return Ok(LayoutOptions::default());
    }
    let data = fs::read_to_string(path)
        .map_err(|e| format!("read layout options {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("parse layout options {}: {e}", path.display()))
}
