//! The facade re-exports are enough for a full generate-run-save cycle.

use rendernet::prelude::*;

#[test]
fn generate_run_and_persist() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::create(tmp.path()).unwrap();

    let mut sim = Simulation::from_config(&SimConfig::default()).unwrap();
    let summary = sim.run(50);
    dir.save_population(sim.population()).unwrap();
    dir.save_jobs(sim.ledger()).unwrap();

    assert_eq!(summary.ticks, 50);
    assert!(summary.completed_artists <= 100);
    assert!(summary.jobs <= summary.completed_artists);
    assert_eq!(dir.load_jobs().unwrap().len(), summary.jobs);
    assert_eq!(dir.load_population().unwrap().node_count(), 20);
}

#[test]
fn costs_follow_the_allocation_policy() {
    let mut sim = Simulation::from_config(&SimConfig {
        num_artists: 50,
        num_nodes: 10,
        seed: 8,
    })
    .unwrap();
    sim.run(40);
    for job in sim.ledger() {
        let artist = sim.artist(job.artist).unwrap();
        let node = sim.node(job.node).unwrap();
        let quote = AllocationPolicy::quote(artist.project_size(), node.tier(), node.bandwidth());
        assert_eq!(job.cost, quote.cost);
        assert_eq!(job.duration, quote.duration);
    }
}
