use std::collections::HashMap;

use tracing::debug;

use crate::types::{
    BracketPayload, MatchId, MatchNumber, Round, SerializedMatch, SerializedParticipant,
    SerializedRelation,
};

/// Reduce a numbered bracket into the flat payload the backend "create
/// bracket" endpoint expects: one record per visible match plus the
/// advancement relations between them, keyed by match number.
///
/// Relations whose source never received a number are dropped silently:
/// that source was a bye whose occupant is already sitting in the
/// target's slot, so there is no edge to advance along.
pub fn serialize(rounds: &[Round]) -> BracketPayload {
    let numbered: HashMap<MatchId, MatchNumber> = rounds
        .iter()
        .flatten()
        .filter_map(|m| m.match_number.map(|n| (m.id, n)))
        .collect();

    let mut matches = Vec::new();
    let mut relations = Vec::new();

    for m in rounds.iter().flatten() {
        if m.hidden {
            continue;
        }
        let Some(match_number) = m.match_number else {
            continue;
        };

        let participants = m
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref().map(|p| SerializedParticipant {
                    participant_id: p.id,
                    role: "competitor".to_string(),
                    position: format!("slot-{}", i + 1),
                    seed: p.seed,
                })
            })
            .collect();
        matches.push(SerializedMatch {
            round: m.round,
            match_number,
            participants,
        });

        for source_id in &m.source_ids {
            if let Some(&source_match_number) = numbered.get(source_id) {
                relations.push(SerializedRelation {
                    source_match_number,
                    target_match_number: match_number,
                    qualifier_rank: 1,
                });
            }
        }
    }

    debug!(
        "serialized bracket payload: {} matches, {} relations",
        matches.len(),
        relations.len()
    );
    BracketPayload { matches, relations }
}
