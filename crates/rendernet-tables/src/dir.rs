//! A data set stored as three CSV files in one directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use rendernet_core::JobRecord;
use rendernet_engine::{JobLedger, Population};
use tracing::info;

use crate::error::TableError;
use crate::table::{read_jobs, read_population, write_artists, write_jobs, write_nodes};

/// File name of the artists table.
pub const ARTISTS_FILE: &str = "artists.csv";
/// File name of the nodes table.
pub const NODES_FILE: &str = "nodes.csv";
/// File name of the jobs table.
pub const JOBS_FILE: &str = "jobs.csv";

/// Directory holding `artists.csv`, `nodes.csv` and `jobs.csv`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Refer to `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Refer to `root`, creating it (and parents) if missing.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, TableError> {
        let dir = Self::new(root);
        fs::create_dir_all(&dir.root)?;
        Ok(dir)
    }

    /// The directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the artists table.
    pub fn artists_path(&self) -> PathBuf {
        self.root.join(ARTISTS_FILE)
    }

    /// Path of the nodes table.
    pub fn nodes_path(&self) -> PathBuf {
        self.root.join(NODES_FILE)
    }

    /// Path of the jobs table.
    pub fn jobs_path(&self) -> PathBuf {
        self.root.join(JOBS_FILE)
    }

    /// Write the artists and nodes tables.
    pub fn save_population(&self, population: &Population) -> Result<(), TableError> {
        write_artists(
            BufWriter::new(File::create(self.artists_path())?),
            population.artists(),
        )?;
        write_nodes(
            BufWriter::new(File::create(self.nodes_path())?),
            population.nodes(),
        )?;
        info!(
            dir = %self.root.display(),
            artists = population.artist_count(),
            nodes = population.node_count(),
            "saved population"
        );
        Ok(())
    }

    /// Read and validate the artists and nodes tables.
    pub fn load_population(&self) -> Result<Population, TableError> {
        let population = read_population(
            BufReader::new(File::open(self.artists_path())?),
            BufReader::new(File::open(self.nodes_path())?),
        )?;
        info!(
            dir = %self.root.display(),
            artists = population.artist_count(),
            nodes = population.node_count(),
            "loaded population"
        );
        Ok(population)
    }

    /// Write the jobs table from a ledger.
    pub fn save_jobs(&self, ledger: &JobLedger) -> Result<(), TableError> {
        write_jobs(BufWriter::new(File::create(self.jobs_path())?), ledger)?;
        info!(dir = %self.root.display(), jobs = ledger.len(), "saved jobs");
        Ok(())
    }

    /// Read the jobs table.
    pub fn load_jobs(&self) -> Result<Vec<JobRecord>, TableError> {
        read_jobs(BufReader::new(File::open(self.jobs_path())?))
    }
}
