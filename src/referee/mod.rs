//! Orchestration glue around the engine: session ownership and user-facing
//! text. Nothing here touches game rules; it renders and sequences.

pub mod announce;
pub mod session;

pub use announce::{bomb_status, final_summary, round_report, rules_text};
pub use session::GameSession;
