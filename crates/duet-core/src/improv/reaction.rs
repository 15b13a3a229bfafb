//! Host reaction selection.
//!
//! Tones are drawn by weighted random: 50% positive, 30% neutral, 20%
//! gentle critique. The draw is independent of the player's actual
//! performance; each tone has three fixed template lines.

use super::model::ReactionTone;
use rand::Rng;

const POSITIVE_LINES: [&str; 3] = [
    "Yes! That was electric, the audience is eating it up!",
    "Brilliant choice, you absolutely owned that scene!",
    "What a delivery, you had the whole room with you!",
];

const NEUTRAL_LINES: [&str; 3] = [
    "Alright, solid work, let's keep the momentum going.",
    "Okay, that's an interesting take on it.",
    "Noted! That's certainly one way to play the scene.",
];

const GENTLE_CRITIQUE_LINES: [&str; 3] = [
    "Fun effort! Next time, try leaning harder into the character.",
    "Good instincts, though the scene wanted a bit more commitment.",
    "Nice try! A touch more energy would really sell it.",
];

/// Draws a reaction tone: 50% positive, 30% neutral, 20% gentle critique.
pub fn draw_tone(rng: &mut impl Rng) -> ReactionTone {
    match rng.gen_range(0..10) {
        0..=4 => ReactionTone::Positive,
        5..=7 => ReactionTone::Neutral,
        _ => ReactionTone::GentleCritique,
    }
}

/// Picks one of the three template lines for `tone` uniformly at random.
pub fn draw_line(rng: &mut impl Rng, tone: ReactionTone) -> &'static str {
    let lines = match tone {
        ReactionTone::Positive => &POSITIVE_LINES,
        ReactionTone::Neutral => &NEUTRAL_LINES,
        ReactionTone::GentleCritique => &GENTLE_CRITIQUE_LINES,
    };
    lines[rng.gen_range(0..lines.len())]
}
