//! Improv session domain models.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The current stage of an improv session.
///
/// Transitions: `Intro -> WaitingForImprov -> Reacting ->
/// (WaitingForImprov | Finished)`, with an early exit to `Finished` from
/// any phase when the player ends the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Intro,
    WaitingForImprov,
    Reacting,
    Finished,
}

/// Reaction tone chosen by weighted random draw after each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReactionTone {
    Positive,
    Neutral,
    GentleCritique,
}

/// An improv prompt from the scenario file.
///
/// The prompt text is stored under the `scenario` key on the wire, matching
/// the scenario file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    #[serde(rename = "scenario")]
    pub prompt: String,
}

/// A completed round: the scenario that was played, what the player did,
/// and how the host reacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    #[serde(flatten)]
    pub scenario: Scenario,
    pub player_text: String,
    pub reaction: String,
    pub tone: ReactionTone,
    /// Timestamp of the round, RFC 3339.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serializes_snake_case() {
        let json = serde_json::to_string(&Phase::WaitingForImprov).unwrap();
        assert_eq!(json, "\"waiting_for_improv\"");
        assert_eq!(Phase::WaitingForImprov.to_string(), "waiting_for_improv");
    }

    #[test]
    fn test_scenario_prompt_uses_wire_key() {
        let s: Scenario = serde_json::from_str(
            r#"{"id":"s1","title":"Lost luggage","scenario":"You are at the airport..."}"#,
        )
        .unwrap();
        assert_eq!(s.prompt, "You are at the airport...");

        let back = serde_json::to_value(&s).unwrap();
        assert!(back.get("scenario").is_some());
        assert!(back.get("prompt").is_none());
    }
}
