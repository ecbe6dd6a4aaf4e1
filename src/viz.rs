use std::collections::{HashMap, HashSet};

use crate::types::{BracketEdge, BracketMatch, BracketNode, BracketNodeData, MatchId, NodePosition, Round};

/// Visible match nodes with their computed positions. Hidden byes are
/// never rendered.
pub fn bracket_nodes(
    rounds: &[Round],
    positions: &HashMap<MatchId, NodePosition>,
) -> Vec<BracketNode> {
    let mut nodes = Vec::new();
    for m in rounds.iter().flatten() {
        if m.hidden {
            continue;
        }
        let position = positions.get(&m.id).copied().unwrap_or_default();
        nodes.push(BracketNode {
            id: m.id.0.to_string(),
            position,
            data: BracketNodeData { bracket_match: m.clone() },
        });
    }
    nodes
}

/// Advancement edges between visible matches. An edge is emitted only
/// when both endpoints are visible; a hidden source already delivered
/// its occupant directly into the target's slot.
pub fn bracket_edges(rounds: &[Round]) -> Vec<BracketEdge> {
    let visible: HashSet<MatchId> = rounds
        .iter()
        .flatten()
        .filter(|m| !m.hidden)
        .map(|m| m.id)
        .collect();

    let mut edges = Vec::new();
    for m in rounds.iter().flatten() {
        if m.hidden {
            continue;
        }
        for source_id in &m.source_ids {
            if !visible.contains(source_id) {
                continue;
            }
            edges.push(BracketEdge {
                id: format!("e{}-{}", source_id.0, m.id.0),
                source: source_id.0.to_string(),
                target: m.id.0.to_string(),
            });
        }
    }
    edges
}

/// Label for a slot: the occupant's name, a "Winner of Match N"
/// reference, or "TBD" when neither is known yet.
pub fn slot_label(m: &BracketMatch, slot_index: usize) -> String {
    if let Some(participant) = m.slots.get(slot_index).and_then(|slot| slot.as_ref()) {
        return participant.name.clone();
    }
    if let Some(Some(number)) = m.display_source_numbers.get(slot_index) {
        return format!("Winner of Match {}", number.0);
    }
    "TBD".to_string()
}
