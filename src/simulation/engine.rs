use crate::rng::SimRng;
use crate::simulation::combo::{evaluate_trial, ComboConfig};
use crate::simulation::deck::DeckList;

/// Trial count used when the CLI does not specify one.
pub const DEFAULT_TRIES: usize = 250;

/// Outcome counters for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialStats {
    pub successes: usize,
    pub failures: usize,
}

impl TrialStats {
    /// Record one trial outcome.
    pub fn record(&mut self, combo_made: bool) {
        if combo_made {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }

    /// Total trials recorded so far.
    pub fn trials(&self) -> usize {
        self.successes + self.failures
    }

    /// Success rate formatted to two decimals with a trailing `%`,
    /// e.g. `"42.40%"`. A zero-trial run divides zero by zero and prints
    /// `"NaN%"`.
    pub fn percentage(&self) -> String {
        let total = self.trials() as f64;
        format!("{:.2}%", self.successes as f64 / total * 100.0)
    }
}

/// Run `tries` independent shuffle-draw-evaluate trials against one deck
/// and aggregate the outcomes.
///
/// Trials run strictly sequentially; each trial shuffles its own copy of
/// the main deck, so the deck list is shared read-only across the run.
pub fn run_trials(
    deck: &DeckList,
    tries: usize,
    config: &ComboConfig,
    rng: &mut SimRng,
) -> TrialStats {
    let mut stats = TrialStats::default();
    for _ in 0..tries {
        stats.record(evaluate_trial(deck, config, rng));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::types::TYPE_MONSTER;
    use crate::card::Card;

    fn filler(id: u32) -> Card {
        Card {
            id,
            card_type: TYPE_MONSTER,
            race: 0,
            level: 4,
            attribute: 0,
            setcode: 0,
            links: vec![],
        }
    }

    fn starterless_deck() -> DeckList {
        DeckList {
            main: (1..=40).map(filler).collect(),
            side: vec![],
            extra: vec![],
        }
    }

    #[test]
    fn counters_always_sum_to_the_trial_count() {
        let deck = starterless_deck();
        let config = ComboConfig::default();

        for tries in [0, 1, 17, 250] {
            let mut rng = SimRng::new(Some(4));
            let stats = run_trials(&deck, tries, &config, &mut rng);
            assert_eq!(stats.trials(), tries);
            assert_eq!(stats.successes + stats.failures, tries);
        }
    }

    #[test]
    fn hopeless_deck_scores_zero() {
        let deck = starterless_deck();
        let mut rng = SimRng::new(Some(8));
        let stats = run_trials(&deck, 250, &ComboConfig::default(), &mut rng);

        assert_eq!(stats.successes, 0);
        assert_eq!(stats.failures, 250);
        assert_eq!(stats.percentage(), "0.00%");
    }

    #[test]
    fn zero_tries_prints_nan() {
        let deck = starterless_deck();
        let mut rng = SimRng::new(Some(8));
        let stats = run_trials(&deck, 0, &ComboConfig::default(), &mut rng);

        assert_eq!(stats, TrialStats::default());
        assert_eq!(stats.percentage(), "NaN%");
    }

    #[test]
    fn percentage_formatting() {
        let stats = TrialStats {
            successes: 106,
            failures: 144,
        };
        assert_eq!(stats.percentage(), "42.40%");

        let all = TrialStats {
            successes: 250,
            failures: 0,
        };
        assert_eq!(all.percentage(), "100.00%");
    }

    #[test]
    fn record_routes_outcomes() {
        let mut stats = TrialStats::default();
        stats.record(true);
        stats.record(false);
        stats.record(false);
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 2);
    }
}
