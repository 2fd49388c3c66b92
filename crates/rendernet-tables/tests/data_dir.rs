//! Directory-level round trips through real files.

use std::fs;

use rendernet_core::{PricingTier, ProjectSize};
use rendernet_engine::{Population, SeededRandom, SimConfig, Simulation};
use rendernet_tables::{DataDir, TableError};
use rendernet_test_utils::{artist, node, AlwaysAvailable};

#[test]
fn simulated_run_survives_save_and_load() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::create(tmp.path().join("data")).unwrap();

    let mut sim = Simulation::from_config(&SimConfig {
        num_artists: 40,
        num_nodes: 8,
        seed: 11,
    })
    .unwrap();
    sim.run(25);
    dir.save_population(sim.population()).unwrap();
    dir.save_jobs(sim.ledger()).unwrap();

    let loaded = dir.load_population().unwrap();
    assert_eq!(loaded.artist_count(), 40);
    assert_eq!(loaded.node_count(), 8);
    for (a, b) in loaded.artists().zip(sim.population().artists()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.project_size(), b.project_size());
        assert_eq!(a.urgency(), b.urgency());
        assert!(!a.is_done(), "completion state is not persisted");
    }
    for (a, b) in loaded.nodes().zip(sim.population().nodes()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.tier(), b.tier());
        assert_eq!(a.bandwidth(), b.bandwidth());
        assert_eq!(a.availability().to_bits(), b.availability().to_bits());
    }

    let jobs = dir.load_jobs().unwrap();
    assert_eq!(jobs.as_slice(), sim.ledger().records());
}

#[test]
fn loaded_population_replays_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::create(tmp.path()).unwrap();
    let pop = Population::new(
        vec![artist(1, ProjectSize::Small), artist(2, ProjectSize::Large)],
        vec![
            node(3, PricingTier::Low, 100, 1.0),
            node(4, PricingTier::High, 33, 0.8),
        ],
    )
    .unwrap();
    dir.save_population(&pop).unwrap();

    let mut original = Simulation::new(pop, SeededRandom::new(5));
    let mut reloaded = Simulation::new(dir.load_population().unwrap(), SeededRandom::new(5));
    original.run(10);
    reloaded.run(10);
    assert_eq!(original.ledger(), reloaded.ledger());
}

#[test]
fn empty_ledger_writes_header_only() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::create(tmp.path()).unwrap();
    let pop = Population::new(vec![artist(1, ProjectSize::Medium)], vec![]).unwrap();
    let mut sim = Simulation::new(pop, AlwaysAvailable::new());
    sim.run(3);
    dir.save_jobs(sim.ledger()).unwrap();

    let text = fs::read_to_string(dir.jobs_path()).unwrap();
    assert_eq!(text, "Job_ID,Artist_ID,Node_ID,Completion_Time,Cost\n");
    assert!(dir.load_jobs().unwrap().is_empty());
}

#[test]
fn missing_files_surface_as_io_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::new(tmp.path().join("absent"));
    assert!(matches!(dir.load_population(), Err(TableError::Io(_))));
    assert!(matches!(dir.load_jobs(), Err(TableError::Io(_))));
}

#[test]
fn colliding_ids_in_files_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = DataDir::create(tmp.path()).unwrap();
    fs::write(
        dir.artists_path(),
        "Artist_ID,Project_Size,Urgency\n1,small,low\n",
    )
    .unwrap();
    fs::write(
        dir.nodes_path(),
        "Node_ID,Pricing_Tier,Bandwidth,Availability\n1,low,50,0.9\n",
    )
    .unwrap();
    let err = dir.load_population().unwrap_err();
    assert!(matches!(err, TableError::Config(_)), "{err}");
}
