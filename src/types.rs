use serde::{Deserialize, Serialize};

// ── Constants ──────────────────────────────────────────────────────────

pub const DEFAULT_X_SPACING: f64 = 250.0;
pub const DEFAULT_Y_SPACING: f64 = 120.0;

// ── Identifiers ────────────────────────────────────────────────────────

/// Generation-scoped match identifier. Unique within a single bracket
/// build, used only to wire matches to their source matches. Never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u32);

/// Human-facing match number assigned after the tree is built. This is
/// the only identifier the backend storage API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchNumber(pub u32);

// ── Participants ───────────────────────────────────────────────────────

/// Raw participant input as supplied by the caller. A missing seed is
/// filled in from the list position (index + 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub id: u32,
    pub name: String,
    pub seed: Option<u32>,
}

/// Normalized participant with a definite seed (1 = strongest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub seed: u32,
}

// ── Bracket structure ──────────────────────────────────────────────────

/// One match in the bracket tree.
///
/// A hidden match is a pure bye: exactly one occupied slot, never
/// rendered or persisted, its occupant auto-advances into the next
/// round. Hidden matches never receive a match number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketMatch {
    pub id: MatchId,
    /// 1-based; round 1 holds the first actual games.
    pub round: u32,
    pub match_number: Option<MatchNumber>,
    pub slots: [Option<Participant>; 2],
    pub hidden: bool,
    /// Ids of the matches whose winners feed this match. Empty in round 1.
    pub source_ids: Vec<MatchId>,
    /// Parallel to `source_ids`: the assigned number of each source, or
    /// `None` when the source is hidden and the slot was filled directly.
    pub display_source_numbers: Vec<Option<MatchNumber>>,
}

pub type Round = Vec<BracketMatch>;

// ── Layout types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    pub x_spacing: f64,
    pub y_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            x_spacing: DEFAULT_X_SPACING,
            y_spacing: DEFAULT_Y_SPACING,
        }
    }
}

// ── Visualization types ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BracketNode {
    pub id: String,
    pub position: NodePosition,
    pub data: BracketNodeData,
}

#[derive(Debug, Clone, Serialize)]
pub struct BracketNodeData {
    #[serde(rename = "match")]
    pub bracket_match: BracketMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

// ── Persistence payload types ──────────────────────────────────────────
// Field names are fixed by the backend "create bracket" contract.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedParticipant {
    pub participant_id: u32,
    pub role: String,
    pub position: String,
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedMatch {
    pub round: u32,
    pub match_number: MatchNumber,
    pub participants: Vec<SerializedParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedRelation {
    pub source_match_number: MatchNumber,
    pub target_match_number: MatchNumber,
    pub qualifier_rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketPayload {
    pub matches: Vec<SerializedMatch>,
    pub relations: Vec<SerializedRelation>,
}
