use tracing::debug;

use crate::numbering::assign_match_numbers;
use crate::seeding::seed_order;
use crate::types::{BracketMatch, MatchId, Participant, ParticipantConfig, Round};

// ── Bracket dimensions ─────────────────────────────────────────────────

/// Slot count of the bracket: the next power of two at or above the
/// participant count (minimum 1).
pub fn bracket_size(participant_count: usize) -> usize {
    participant_count.max(1).next_power_of_two()
}

/// Number of rounds for a given participant count; 0 for 0 or 1
/// participants (nothing to play).
pub fn total_rounds(participant_count: usize) -> u32 {
    bracket_size(participant_count).trailing_zeros()
}

// ── Pipeline entry ─────────────────────────────────────────────────────

/// Build the full bracket for the given participants: seeded tree with
/// byes wired in, then match numbers assigned. Every call produces a
/// fresh structure; nothing is reused between calls.
pub fn generate(participants: &[ParticipantConfig]) -> Result<Vec<Round>, String> {
    let mut rounds = build_rounds(participants)?;
    assign_match_numbers(&mut rounds);
    debug!(
        "generated bracket: {} participants, {} slots, {} rounds",
        participants.len(),
        bracket_size(participants.len()),
        rounds.len()
    );
    Ok(rounds)
}

// ── Tree construction ──────────────────────────────────────────────────

/// Build the round-by-round match structure without numbering.
///
/// Round 1 pairs the seeded slots; a pair with exactly one occupant is a
/// pure bye and gets hidden. Later rounds pair consecutive matches of
/// the previous round, pre-populating only bye occupants -- real winners
/// are unknown at build time and stay `None`.
pub fn build_rounds(participants: &[ParticipantConfig]) -> Result<Vec<Round>, String> {
    let mut seen_ids = std::collections::HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen_ids.insert(p.id) {
            return Err(format!("Duplicate participant id {}.", p.id));
        }
    }

    let seeded = normalize_participants(participants);
    let size = bracket_size(seeded.len());
    let rounds_total = total_rounds(seeded.len());

    let mut rounds: Vec<Round> = Vec::new();
    if rounds_total == 0 {
        // 0 or 1 participants: a trivial bracket with nothing to play.
        return Ok(rounds);
    }

    let order = seed_order(size as u32)?;
    let slots: Vec<Option<Participant>> = order
        .iter()
        .map(|&rank| seeded.get(rank as usize - 1).cloned())
        .collect();

    let mut next_id = 1u32;

    let mut first_round: Round = Vec::with_capacity(size / 2);
    for pair in slots.chunks(2) {
        let p1 = pair[0].clone();
        let p2 = pair[1].clone();
        // Exactly one occupant means a pure bye. Both empty cannot occur:
        // the first slot of every pair carries a seed within the top half,
        // which is always populated once there is at least one participant.
        let is_bye = p1.is_some() != p2.is_some();
        first_round.push(BracketMatch {
            id: MatchId(next_id),
            round: 1,
            match_number: None,
            slots: [p1, p2],
            hidden: is_bye,
            source_ids: Vec::new(),
            display_source_numbers: Vec::new(),
        });
        next_id += 1;
    }
    rounds.push(first_round);

    for r in 2..=rounds_total {
        let current: Round = {
            let prev = rounds.last().expect("previous round exists");
            let mut current = Vec::with_capacity(prev.len() / 2);
            for pair in prev.chunks(2) {
                let left = &pair[0];
                let right = &pair[1];
                // A bye's sole occupant advances directly; a real match
                // leaves the slot empty until its winner is known.
                let slots = [
                    if left.hidden { left.slots[0].clone() } else { None },
                    if right.hidden { right.slots[0].clone() } else { None },
                ];
                current.push(BracketMatch {
                    id: MatchId(next_id),
                    round: r,
                    match_number: None,
                    slots,
                    hidden: false,
                    source_ids: vec![left.id, right.id],
                    display_source_numbers: Vec::new(),
                });
                next_id += 1;
            }
            current
        };
        rounds.push(current);
    }

    Ok(rounds)
}

/// Fill in missing seeds from list position and sort ascending by seed.
/// The sort is stable, so equal seeds keep their input order.
fn normalize_participants(participants: &[ParticipantConfig]) -> Vec<Participant> {
    let mut seeded: Vec<Participant> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| Participant {
            id: p.id,
            name: p.name.clone(),
            seed: p.seed.unwrap_or(i as u32 + 1),
        })
        .collect();
    seeded.sort_by_key(|p| p.seed);
    seeded
}
