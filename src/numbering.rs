use std::collections::{HashMap, VecDeque};

use crate::types::{MatchId, MatchNumber, Round};

/// Assign sequential match numbers in tournament-sheet order and
/// back-fill the "winner of match N" references.
///
/// Rounds are numbered strictly in order, but the order *within* a round
/// is dynamic: whenever a match is numbered, its parent in the next
/// round is deferred to the back of that round's queue. This way a
/// parent is only numbered once every feeder scheduled ahead of it has
/// been, which matches how real bracket sheets count matches. Hidden
/// byes are skipped entirely and cause no reordering.
///
/// The queues are local to this pass; the stored order of each round is
/// left untouched.
pub fn assign_match_numbers(rounds: &mut [Round]) {
    let mut counter = 1u32;
    let mut numbered: HashMap<MatchId, MatchNumber> = HashMap::new();

    let mut queues: Vec<VecDeque<usize>> = rounds
        .iter()
        .map(|round| (0..round.len()).collect())
        .collect();

    for r in 0..rounds.len() {
        while let Some(i) = queues[r].pop_front() {
            if rounds[r][i].hidden {
                continue;
            }
            let number = MatchNumber(counter);
            counter += 1;
            rounds[r][i].match_number = Some(number);
            let id = rounds[r][i].id;
            numbered.insert(id, number);

            if r + 1 < rounds.len() {
                defer_parent(&rounds[r + 1], &mut queues[r + 1], id);
            }
        }
    }

    for round in rounds.iter_mut() {
        for m in round.iter_mut() {
            if !m.source_ids.is_empty() {
                // None marks a hidden source: the slot was filled
                // directly rather than by a linked winner.
                m.display_source_numbers = m
                    .source_ids
                    .iter()
                    .map(|source_id| numbered.get(source_id).copied())
                    .collect();
            }
        }
    }
}

/// Move the parent of `child_id` to the back of the next round's queue.
fn defer_parent(next_round: &Round, queue: &mut VecDeque<usize>, child_id: MatchId) {
    let Some(parent_index) = next_round
        .iter()
        .position(|m| m.source_ids.contains(&child_id))
    else {
        return;
    };
    if let Some(queue_pos) = queue.iter().position(|&i| i == parent_index) {
        queue.remove(queue_pos);
        queue.push_back(parent_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{build_rounds, generate};
    use crate::types::ParticipantConfig;

    fn make_participants(count: u32) -> Vec<ParticipantConfig> {
        (1..=count)
            .map(|i| ParticipantConfig {
                id: i,
                name: format!("Player {i}"),
                seed: Some(i),
            })
            .collect()
    }

    fn assigned_numbers(rounds: &[Round]) -> Vec<u32> {
        rounds
            .iter()
            .flatten()
            .filter_map(|m| m.match_number.map(|n| n.0))
            .collect()
    }

    #[test]
    fn test_numbering_is_dense_and_unique() {
        for count in [2u32, 3, 5, 6, 7, 8, 11, 16] {
            let rounds = generate(&make_participants(count)).unwrap();
            let visible = rounds.iter().flatten().filter(|m| !m.hidden).count();
            let mut numbers = assigned_numbers(&rounds);
            numbers.sort();
            let expected: Vec<u32> = (1..=visible as u32).collect();
            assert_eq!(numbers, expected, "count {count}");
        }
    }

    #[test]
    fn test_lower_rounds_numbered_first() {
        let rounds = generate(&make_participants(8)).unwrap();
        // Round 1 takes 1-4, semifinals 5-6, final 7.
        let r1: Vec<u32> = rounds[0].iter().filter_map(|m| m.match_number.map(|n| n.0)).collect();
        assert_eq!(r1, vec![1, 2, 3, 4]);
        let r2: Vec<u32> = rounds[1].iter().filter_map(|m| m.match_number.map(|n| n.0)).collect();
        assert_eq!(r2, vec![5, 6]);
        assert_eq!(rounds[2][0].match_number.map(|n| n.0), Some(7));
    }

    #[test]
    fn test_hidden_matches_never_numbered() {
        let rounds = generate(&make_participants(5)).unwrap();
        for m in rounds.iter().flatten() {
            assert_eq!(m.hidden, m.match_number.is_none());
        }
    }

    #[test]
    fn test_display_source_numbers_defined_iff_source_visible() {
        let rounds = generate(&make_participants(5)).unwrap();
        let by_id: std::collections::HashMap<_, _> = rounds
            .iter()
            .flatten()
            .map(|m| (m.id, m.hidden))
            .collect();
        for m in rounds.iter().flatten() {
            assert_eq!(m.display_source_numbers.len(), m.source_ids.len());
            for (source_id, display) in m.source_ids.iter().zip(&m.display_source_numbers) {
                let source_hidden = by_id[source_id];
                assert_eq!(display.is_some(), !source_hidden);
            }
        }
    }

    #[test]
    fn test_stored_round_order_is_preserved() {
        let mut rounds = build_rounds(&make_participants(8)).unwrap();
        let ids_before: Vec<Vec<_>> = rounds
            .iter()
            .map(|round| round.iter().map(|m| m.id).collect())
            .collect();
        assign_match_numbers(&mut rounds);
        let ids_after: Vec<Vec<_>> = rounds
            .iter()
            .map(|round| round.iter().map(|m| m.id).collect())
            .collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn test_empty_bracket() {
        let mut rounds: Vec<Round> = Vec::new();
        assign_match_numbers(&mut rounds);
        assert!(rounds.is_empty());
    }
}
