//! Scenario draw pool.

use super::model::Scenario;
use rand::Rng;
use std::collections::HashSet;

/// The pool of improv prompts with used-id tracking.
///
/// Draws are uniform over the scenarios not yet used in the current cycle.
/// When every scenario has been used, the used set resets and a new full
/// cycle begins with repeats allowed again.
#[derive(Debug, Clone, Default)]
pub struct ScenarioDeck {
    scenarios: Vec<Scenario>,
    used_ids: HashSet<String>,
}

impl ScenarioDeck {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios,
            used_ids: HashSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Ids already presented in the current cycle.
    pub fn used_ids(&self) -> &HashSet<String> {
        &self.used_ids
    }

    /// Draws a scenario uniformly at random from the unused pool, marking
    /// it used. Returns `None` only when the deck holds no scenarios at
    /// all.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<Scenario> {
        if self.scenarios.is_empty() {
            return None;
        }

        let mut unused: Vec<&Scenario> = self
            .scenarios
            .iter()
            .filter(|s| !self.used_ids.contains(&s.id))
            .collect();

        if unused.is_empty() {
            self.used_ids.clear();
            unused = self.scenarios.iter().collect();
        }

        let picked = unused[rng.gen_range(0..unused.len())].clone();
        self.used_ids.insert(picked.id.clone());
        Some(picked)
    }
}
