//! Property tests for the scheduling invariants that must hold for
//! every seed and population shape.

use proptest::prelude::*;
use rendernet_engine::{SimConfig, Simulation};
use rendernet_test_utils::{assert_ledger_consistent, assert_node_exclusivity};

fn arb_config() -> impl Strategy<Value = SimConfig> {
    (1usize..40, 0usize..12, any::<u64>()).prop_map(|(num_artists, num_nodes, seed)| SimConfig {
        num_artists,
        num_nodes,
        seed,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nodes_serve_at_most_one_job(config in arb_config(), ticks in 0u64..40) {
        let mut sim = Simulation::from_config(&config).unwrap();
        for _ in 0..ticks {
            sim.step();
            assert_node_exclusivity(&sim);
        }
    }

    #[test]
    fn completion_never_reverts(config in arb_config(), ticks in 1u64..40) {
        let mut sim = Simulation::from_config(&config).unwrap();
        let mut previous: Vec<bool> = sim.population().artists().map(|a| a.is_done()).collect();
        for _ in 0..ticks {
            sim.step();
            let current: Vec<bool> = sim.population().artists().map(|a| a.is_done()).collect();
            for (before, after) in previous.iter().zip(&current) {
                prop_assert!(!*before || *after, "artist completion reverted");
            }
            previous = current;
        }
    }

    #[test]
    fn ledger_is_consistent_and_bounded(config in arb_config(), ticks in 0u64..40) {
        let mut sim = Simulation::from_config(&config).unwrap();
        let summary = sim.run(ticks);
        assert_ledger_consistent(&sim);
        prop_assert!(summary.completed_artists <= config.num_artists);
        prop_assert!(summary.jobs <= summary.completed_artists);
        prop_assert_eq!(summary.jobs, sim.ledger().len());
        for record in sim.ledger() {
            prop_assert!(record.artist.0 as usize <= config.num_artists);
            prop_assert!(record.node.0 as usize > config.num_artists);
        }
    }

    #[test]
    fn per_tick_reports_add_up(config in arb_config(), ticks in 0u64..30) {
        let mut sim = Simulation::from_config(&config).unwrap();
        let mut assigned = 0;
        let mut claimed = 0;
        for _ in 0..ticks {
            let report = sim.step();
            prop_assert!(report.assigned + report.missed + report.waiting <= config.num_artists);
            assigned += report.assigned;
            claimed += report.assigned + report.missed;
        }
        prop_assert_eq!(assigned, sim.ledger().len());
        prop_assert_eq!(claimed, sim.completed_artists());
    }
}
