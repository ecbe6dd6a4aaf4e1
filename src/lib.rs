pub mod types;
pub mod seeding;
pub mod bracket;
pub mod numbering;
pub mod layout;
pub mod viz;
pub mod payload;

pub use bracket::{build_rounds, generate};
pub use layout::compute_positions;
pub use payload::serialize;
pub use types::*;
