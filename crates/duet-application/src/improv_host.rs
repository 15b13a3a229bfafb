//! The improv show host agent.
//!
//! Wraps one `ImprovSession` behind a lock together with its RNG. Each
//! public method mirrors one tool; rejections come back as structured
//! replies the conversational layer can speak.

use duet_core::improv::{ImprovSession, ScenarioDeck};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// System prompt for the voice framework driving this agent.
pub const INSTRUCTIONS: &str = "\
You are the energetic host of a short improv game show. Greet the player,
ask their name and record it with set_player, then run scenes: call
next_scene to present a scenario, let the player improvise, and call
complete_improv with their performance. React with the returned line and
tone. After the final round, or when the player asks to stop, call
finish_show and deliver the summary. Keep the energy high and replies short.";

struct HostState {
    session: ImprovSession,
    rng: StdRng,
}

pub struct ImprovHost {
    state: Mutex<HostState>,
}

impl ImprovHost {
    pub fn new(deck: ScenarioDeck) -> Self {
        Self::with_rng(deck, StdRng::from_entropy())
    }

    /// Seeded constructor for deterministic tests.
    pub fn seeded(deck: ScenarioDeck, seed: u64) -> Self {
        Self::with_rng(deck, StdRng::seed_from_u64(seed))
    }

    fn with_rng(deck: ScenarioDeck, rng: StdRng) -> Self {
        Self {
            state: Mutex::new(HostState {
                session: ImprovSession::new(deck),
                rng,
            }),
        }
    }

    /// Records the player's name.
    pub async fn set_player(&self, name: &str) -> Value {
        let mut state = self.state.lock().await;
        let label = state.session.set_player(name).to_string();
        json!({"ok": true, "player": label})
    }

    /// Opens the next round with a freshly drawn scenario.
    pub async fn next_scene(&self) -> Value {
        let mut state = self.state.lock().await;
        let HostState { session, rng } = &mut *state;
        match session.next_scene(rng) {
            Ok(scenario) => {
                let round = session.rounds().len() + 1;
                json!({"ok": true, "round": round, "scenario": scenario})
            }
            Err(rejection) => json!({"ok": false, "message": rejection.to_string()}),
        }
    }

    /// Closes the current round with the player's performance.
    pub async fn complete_improv(&self, player_text: &str) -> Value {
        let mut state = self.state.lock().await;
        let HostState { session, rng } = &mut *state;
        match session.complete_improv(rng, player_text) {
            Ok(result) => {
                let mut reply = serde_json::to_value(&result)
                    .unwrap_or_else(|_| json!({}));
                reply["ok"] = json!(true);
                reply
            }
            Err(rejection) => json!({"ok": false, "message": rejection.to_string()}),
        }
    }

    /// Ends the show from any phase.
    pub async fn finish_show(&self) -> Value {
        let mut state = self.state.lock().await;
        let summary = state.session.finish_show();
        json!({"ok": true, "summary": summary, "phase": state.session.phase()})
    }

    /// Read-only snapshot of the session.
    pub async fn session_status(&self) -> Value {
        let state = self.state.lock().await;
        serde_json::to_value(state.session.status()).unwrap_or_else(|_| json!({}))
    }
}
