//! Improv show domain module.
//!
//! Contains the session state machine driven by the host agent's tool
//! calls, the scenario pool, and reaction/summary composition.
//!
//! # Module Structure
//!
//! - `model`: wire-visible types (`Phase`, `ReactionTone`, `Scenario`,
//!   `RoundRecord`)
//! - `scenario`: the `ScenarioDeck` draw pool with used-id tracking
//! - `reaction`: weighted tone draw and fixed reaction templates
//! - `session`: the `ImprovSession` state machine

mod model;
mod reaction;
mod scenario;
mod session;

pub use model::{Phase, ReactionTone, RoundRecord, Scenario};
pub use reaction::{draw_line, draw_tone};
pub use scenario::ScenarioDeck;
pub use session::{
    DEFAULT_PLAYER_NAME, ImprovRejection, ImprovSession, MAX_ROUNDS, RoundResult, SessionStatus,
    ShowProgress,
};
