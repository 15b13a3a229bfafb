//! The improv session state machine.
//!
//! One `ImprovSession` value tracks a single show. It is owned by the host
//! agent and mutated only through the methods here, one tool call at a
//! time; nothing about it is global, so several shows can run side by side.

use super::model::{Phase, ReactionTone, RoundRecord, Scenario};
use super::reaction;
use super::scenario::ScenarioDeck;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Number of rounds in a full show.
pub const MAX_ROUNDS: u32 = 4;

/// Label used when the player never gave a name.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

const SNIPPET_MAX_CHARS: usize = 60;

const STYLE_BOLD: &str = "Your style tonight was bold, playful, and full of spark.";
const STYLE_THOUGHTFUL: &str = "Your style tonight was thoughtful, deliberate, and quietly daring.";
const CLOSING_TIP: &str = "Tip for next time: say yes to the scene before your head says no.";

/// Non-fatal reasons a transition is refused.
///
/// These are reported back to the conversational layer as structured
/// replies; they never abort the session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprovRejection {
    #[error("rounds complete")]
    RoundsComplete,
    #[error("no scenarios")]
    NoScenarios,
    #[error("no active scenario")]
    NoActiveScenario,
}

/// What happened after a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShowProgress {
    /// More rounds to play; the host should call for the next scene.
    Continue { next_round: u32 },
    /// That was the final round; the show is over.
    Finished { summary: String },
}

/// Result of a completed improv round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub reaction: String,
    pub tone: ReactionTone,
    pub round: u32,
    #[serde(flatten)]
    pub progress: ShowProgress,
}

/// Read-only snapshot of the session for the `session_status` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub player_name: Option<String>,
    pub phase: Phase,
    pub current_round: u32,
    pub max_rounds: u32,
    pub improv_turns: u32,
    pub current_scenario: Option<Scenario>,
    pub rounds_recorded: usize,
}

/// State for one improv show.
pub struct ImprovSession {
    player_name: Option<String>,
    current_round: u32,
    rounds: Vec<RoundRecord>,
    phase: Phase,
    current_scenario: Option<Scenario>,
    improv_turns: u32,
    deck: ScenarioDeck,
}

impl ImprovSession {
    pub fn new(deck: ScenarioDeck) -> Self {
        Self {
            player_name: None,
            current_round: 0,
            rounds: Vec::new(),
            phase: Phase::Intro,
            current_scenario: None,
            improv_turns: 0,
            deck,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// The player's name, or the default label when none was given.
    pub fn player_label(&self) -> &str {
        self.player_name.as_deref().unwrap_or(DEFAULT_PLAYER_NAME)
    }

    /// Records the player's name. Blank input falls back to the default
    /// label. Never changes the phase.
    pub fn set_player(&mut self, name: &str) -> &str {
        let trimmed = name.trim();
        self.player_name = if trimmed.is_empty() {
            Some(DEFAULT_PLAYER_NAME.to_string())
        } else {
            Some(trimmed.to_string())
        };
        self.player_label()
    }

    /// Draws the next scenario and opens a round.
    ///
    /// Refused once all rounds are played or when the scenario pool is
    /// empty. Resets the per-round turn counter.
    pub fn next_scene(&mut self, rng: &mut impl Rng) -> Result<Scenario, ImprovRejection> {
        if self.current_round >= MAX_ROUNDS {
            return Err(ImprovRejection::RoundsComplete);
        }
        let scenario = self.deck.draw(rng).ok_or(ImprovRejection::NoScenarios)?;
        self.phase = Phase::WaitingForImprov;
        self.improv_turns = 0;
        self.current_scenario = Some(scenario.clone());
        Ok(scenario)
    }

    /// Closes the current round with the player's performance.
    ///
    /// Draws a reaction tone (50/30/20 weighted, independent of the text),
    /// records the round, and either asks for the next scene or finishes
    /// the show when the round limit is reached.
    pub fn complete_improv(
        &mut self,
        rng: &mut impl Rng,
        player_text: &str,
    ) -> Result<RoundResult, ImprovRejection> {
        let scenario = self
            .current_scenario
            .take()
            .ok_or(ImprovRejection::NoActiveScenario)?;

        self.improv_turns += 1;
        let tone = reaction::draw_tone(rng);
        let line = reaction::draw_line(rng, tone).to_string();

        self.rounds.push(RoundRecord {
            scenario,
            player_text: player_text.to_string(),
            reaction: line.clone(),
            tone,
            timestamp: Utc::now().to_rfc3339(),
        });

        self.current_round += 1;
        self.phase = Phase::Reacting;

        let progress = if self.current_round >= MAX_ROUNDS {
            self.phase = Phase::Finished;
            ShowProgress::Finished {
                summary: self.closing_summary(),
            }
        } else {
            ShowProgress::Continue {
                next_round: self.current_round + 1,
            }
        };

        Ok(RoundResult {
            reaction: line,
            tone,
            round: self.current_round,
            progress,
        })
    }

    /// Ends the show from any phase and returns the closing summary.
    pub fn finish_show(&mut self) -> String {
        self.phase = Phase::Finished;
        self.current_scenario = None;
        self.closing_summary()
    }

    /// Read-only snapshot; does not mutate.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            player_name: self.player_name.clone(),
            phase: self.phase,
            current_round: self.current_round,
            max_rounds: MAX_ROUNDS,
            improv_turns: self.improv_turns,
            current_scenario: self.current_scenario.clone(),
            rounds_recorded: self.rounds.len(),
        }
    }

    /// Composes the closing summary from the round history.
    ///
    /// Deterministic given the recorded rounds: up to two labeled
    /// highlights with snippets capped at 60 characters, a style sentence
    /// picked by comparing positive vs gentle-critique counts (ties go to
    /// the bold descriptor), and a fixed closing tip.
    pub fn closing_summary(&self) -> String {
        let name = self.player_label();

        if self.rounds.is_empty() {
            return format!(
                "And that's our show, {}! We didn't get a scene in this time, \
                 but the stage will be right here waiting for you.",
                name
            );
        }

        let highlights = self
            .rounds
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, round)| {
                format!(
                    "Highlight {}: \"{}\"",
                    i + 1,
                    truncate_snippet(&round.player_text)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let positive = self
            .rounds
            .iter()
            .filter(|r| r.tone == ReactionTone::Positive)
            .count();
        let critique = self
            .rounds
            .iter()
            .filter(|r| r.tone == ReactionTone::GentleCritique)
            .count();
        let style = if positive >= critique {
            STYLE_BOLD
        } else {
            STYLE_THOUGHTFUL
        };

        format!(
            "What a show, {}! {} {} {}",
            name, highlights, style, CLOSING_TIP
        )
    }
}

fn truncate_snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_MAX_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(SNIPPET_MAX_CHARS).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck(n: usize) -> ScenarioDeck {
        ScenarioDeck::new(
            (0..n)
                .map(|i| Scenario {
                    id: format!("s{}", i),
                    title: format!("Scene {}", i),
                    prompt: format!("Prompt {}", i),
                })
                .collect(),
        )
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_set_player_normalizes_blank_names() {
        let mut session = ImprovSession::new(deck(1));
        assert_eq!(session.set_player("   "), "Player");
        assert_eq!(session.set_player("  Maya "), "Maya");
        assert_eq!(session.phase(), Phase::Intro);
    }

    #[test]
    fn test_next_scene_opens_a_round() {
        let mut session = ImprovSession::new(deck(3));
        let mut rng = rng();
        let scenario = session.next_scene(&mut rng).unwrap();
        assert!(!scenario.id.is_empty());
        assert_eq!(session.phase(), Phase::WaitingForImprov);
        assert_eq!(session.status().improv_turns, 0);
    }

    #[test]
    fn test_next_scene_with_empty_pool_is_refused() {
        let mut session = ImprovSession::new(deck(0));
        let mut rng = rng();
        assert_eq!(
            session.next_scene(&mut rng).unwrap_err(),
            ImprovRejection::NoScenarios
        );
    }

    #[test]
    fn test_complete_improv_without_scene_is_refused() {
        let mut session = ImprovSession::new(deck(2));
        let mut rng = rng();
        assert_eq!(
            session.complete_improv(&mut rng, "I freeze").unwrap_err(),
            ImprovRejection::NoActiveScenario
        );
    }

    #[test]
    fn test_round_consumes_current_scenario() {
        let mut session = ImprovSession::new(deck(4));
        let mut rng = rng();
        session.next_scene(&mut rng).unwrap();
        session.complete_improv(&mut rng, "a scene").unwrap();
        // The round is closed; another completion needs a new scene first.
        assert_eq!(
            session.complete_improv(&mut rng, "again").unwrap_err(),
            ImprovRejection::NoActiveScenario
        );
    }

    #[test]
    fn test_full_show_reaches_finished_after_max_rounds() {
        let mut session = ImprovSession::new(deck(4));
        let mut rng = rng();

        for round in 1..=MAX_ROUNDS {
            session.next_scene(&mut rng).unwrap();
            let result = session.complete_improv(&mut rng, "performance").unwrap();
            assert_eq!(result.round, round);
            if round < MAX_ROUNDS {
                assert_eq!(session.phase(), Phase::Reacting);
                assert!(matches!(
                    result.progress,
                    ShowProgress::Continue { next_round } if next_round == round + 1
                ));
            } else {
                assert_eq!(session.phase(), Phase::Finished);
                assert!(matches!(result.progress, ShowProgress::Finished { .. }));
            }
        }

        assert_eq!(session.rounds().len(), MAX_ROUNDS as usize);
        assert_eq!(
            session.next_scene(&mut rng).unwrap_err(),
            ImprovRejection::RoundsComplete
        );
    }

    #[test]
    fn test_finish_show_is_an_early_exit_from_any_phase() {
        let mut session = ImprovSession::new(deck(2));
        let mut rng = rng();
        session.set_player("Ravi");
        session.next_scene(&mut rng).unwrap();

        let summary = session.finish_show();
        assert_eq!(session.phase(), Phase::Finished);
        assert!(summary.contains("Ravi"));
        // Mid-scene exit leaves no completed rounds.
        assert!(session.rounds().is_empty());
    }

    #[test]
    fn test_summary_with_no_rounds_encourages_by_name() {
        let mut session = ImprovSession::new(deck(1));
        session.set_player("Maya");
        let summary = session.finish_show();
        assert!(summary.contains("Maya"));
        assert!(!summary.contains("Highlight"));
    }

    #[test]
    fn test_summary_truncates_long_snippets() {
        let mut session = ImprovSession::new(deck(2));
        let mut rng = rng();
        session.next_scene(&mut rng).unwrap();
        let long_text = "x".repeat(80);
        session.complete_improv(&mut rng, &long_text).unwrap();

        let summary = session.finish_show();
        let expected = format!("\"{}...\"", "x".repeat(60));
        assert!(summary.contains(&expected));
        assert!(!summary.contains(&"x".repeat(61)));
    }

    #[test]
    fn test_summary_uses_at_most_two_highlights() {
        let mut session = ImprovSession::new(deck(4));
        let mut rng = rng();
        for i in 0..3 {
            session.next_scene(&mut rng).unwrap();
            session
                .complete_improv(&mut rng, &format!("scene number {}", i))
                .unwrap();
        }
        let summary = session.finish_show();
        assert!(summary.contains("Highlight 1"));
        assert!(summary.contains("Highlight 2"));
        assert!(!summary.contains("Highlight 3"));
    }

    #[test]
    fn test_style_tie_favors_bold_descriptor() {
        // No rounds carry tones here; force a tie by hand-building history
        // through the public flow with a session that recorded zero
        // positive and zero critique rounds is not constructible, so use
        // one neutral-ish round: equal counts (0 == 0 is impossible once a
        // round exists; 1 == 1 requires two rounds). Draw rounds until the
        // recorded tones tie, then check the descriptor.
        for seed in 0..200u64 {
            let mut session = ImprovSession::new(deck(4));
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..2 {
                session.next_scene(&mut rng).unwrap();
                session.complete_improv(&mut rng, "bit").unwrap();
            }
            let positive = session
                .rounds()
                .iter()
                .filter(|r| r.tone == ReactionTone::Positive)
                .count();
            let critique = session
                .rounds()
                .iter()
                .filter(|r| r.tone == ReactionTone::GentleCritique)
                .count();
            if positive == critique {
                let summary = session.closing_summary();
                assert!(summary.contains("bold, playful"));
                return;
            }
        }
        panic!("no seed produced a tone tie in 200 attempts");
    }
}
