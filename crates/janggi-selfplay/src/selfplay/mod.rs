pub mod config;
pub mod game;
pub mod types;

pub use config::{load_rules, resolve_rules};
pub use game::{run_game, GameConfig, GameRecord, MoveEvent};
pub use types::{side_label, EndReason, GameOutcome, SetupChoice, SummaryCounts};
