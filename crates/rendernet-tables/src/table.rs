//! Reading and writing the three tables over any `Read` / `Write`.

use std::fmt::Display;
use std::io::{Read, Write};

use rendernet_core::{ArtistId, JobId, JobRecord, NodeId};
use rendernet_engine::{Artist, Node, Population};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableError;

/// Column contract of the `artists` table.
pub const ARTIST_COLUMNS: [&str; 3] = ["Artist_ID", "Project_Size", "Urgency"];
/// Column contract of the `nodes` table.
pub const NODE_COLUMNS: [&str; 4] = ["Node_ID", "Pricing_Tier", "Bandwidth", "Availability"];
/// Column contract of the `jobs` table.
pub const JOB_COLUMNS: [&str; 5] = ["Job_ID", "Artist_ID", "Node_ID", "Completion_Time", "Cost"];

#[derive(Debug, Serialize, Deserialize)]
struct ArtistRow {
    #[serde(rename = "Artist_ID")]
    artist_id: u32,
    #[serde(rename = "Project_Size")]
    project_size: String,
    #[serde(rename = "Urgency")]
    urgency: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRow {
    #[serde(rename = "Node_ID")]
    node_id: u32,
    #[serde(rename = "Pricing_Tier")]
    pricing_tier: String,
    #[serde(rename = "Bandwidth")]
    bandwidth: u32,
    #[serde(rename = "Availability")]
    availability: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct JobRow {
    #[serde(rename = "Job_ID")]
    job_id: u64,
    #[serde(rename = "Artist_ID")]
    artist_id: u32,
    #[serde(rename = "Node_ID")]
    node_id: u32,
    #[serde(rename = "Completion_Time")]
    completion_time: f64,
    #[serde(rename = "Cost")]
    cost: u32,
}

// ── Writing ─────────────────────────────────────────────────────

/// Write the `artists` table.
pub fn write_artists<'a, W, I>(sink: W, artists: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = &'a Artist>,
{
    let mut writer = table_writer(sink, &ARTIST_COLUMNS)?;
    let mut rows = 0usize;
    for artist in artists {
        writer.serialize(ArtistRow {
            artist_id: artist.id().0,
            project_size: artist.project_size().to_string(),
            urgency: artist.urgency().to_string(),
        })?;
        rows += 1;
    }
    writer.flush()?;
    debug!(table = "artists", rows, "wrote table");
    Ok(())
}

/// Write the `nodes` table.
pub fn write_nodes<'a, W, I>(sink: W, nodes: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = &'a Node>,
{
    let mut writer = table_writer(sink, &NODE_COLUMNS)?;
    let mut rows = 0usize;
    for node in nodes {
        writer.serialize(NodeRow {
            node_id: node.id().0,
            pricing_tier: node.tier().to_string(),
            bandwidth: node.bandwidth(),
            availability: node.availability(),
        })?;
        rows += 1;
    }
    writer.flush()?;
    debug!(table = "nodes", rows, "wrote table");
    Ok(())
}

/// Write the `jobs` table. The header is written even with no jobs.
pub fn write_jobs<'a, W, I>(sink: W, jobs: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = &'a JobRecord>,
{
    let mut writer = table_writer(sink, &JOB_COLUMNS)?;
    let mut rows = 0usize;
    for job in jobs {
        writer.serialize(JobRow {
            job_id: job.id.0,
            artist_id: job.artist.0,
            node_id: job.node.0,
            completion_time: job.duration,
            cost: job.cost,
        })?;
        rows += 1;
    }
    writer.flush()?;
    debug!(table = "jobs", rows, "wrote table");
    Ok(())
}

/// Header written by hand so that empty tables still carry it.
fn table_writer<W: Write>(sink: W, columns: &[&str]) -> Result<csv::Writer<W>, TableError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(columns)?;
    Ok(writer)
}

// ── Reading ─────────────────────────────────────────────────────

/// Read the `artists` table.
pub fn read_artists<R: Read>(source: R) -> Result<Vec<Artist>, TableError> {
    let mut reader = table_reader(source, "artists", &ARTIST_COLUMNS)?;
    let mut artists = Vec::new();
    for (i, row) in reader.deserialize::<ArtistRow>().enumerate() {
        let row = row?;
        let line = i + 1;
        let size = row
            .project_size
            .parse()
            .map_err(|e| invalid("artists", line, "Project_Size", e))?;
        let urgency = row
            .urgency
            .parse()
            .map_err(|e| invalid("artists", line, "Urgency", e))?;
        artists.push(Artist::new(ArtistId(row.artist_id), size, urgency));
    }
    debug!(table = "artists", rows = artists.len(), "read table");
    Ok(artists)
}

/// Read the `nodes` table.
///
/// Attribute ranges (bandwidth, availability) are checked when the
/// nodes are assembled into a [`Population`].
pub fn read_nodes<R: Read>(source: R) -> Result<Vec<Node>, TableError> {
    let mut reader = table_reader(source, "nodes", &NODE_COLUMNS)?;
    let mut nodes = Vec::new();
    for (i, row) in reader.deserialize::<NodeRow>().enumerate() {
        let row = row?;
        let tier = row
            .pricing_tier
            .parse()
            .map_err(|e| invalid("nodes", i + 1, "Pricing_Tier", e))?;
        nodes.push(Node::new(
            NodeId(row.node_id),
            tier,
            row.bandwidth,
            row.availability,
        ));
    }
    debug!(table = "nodes", rows = nodes.len(), "read table");
    Ok(nodes)
}

/// Read the `jobs` table.
///
/// Job IDs must run `1..=rows` in order, and completion times must be
/// finite and positive.
pub fn read_jobs<R: Read>(source: R) -> Result<Vec<JobRecord>, TableError> {
    let mut reader = table_reader(source, "jobs", &JOB_COLUMNS)?;
    let mut jobs = Vec::new();
    for (i, row) in reader.deserialize::<JobRow>().enumerate() {
        let row = row?;
        let line = i + 1;
        if row.job_id != line as u64 {
            return Err(invalid(
                "jobs",
                line,
                "Job_ID",
                format!("expected {line}, found {}", row.job_id),
            ));
        }
        if !(row.completion_time.is_finite() && row.completion_time > 0.0) {
            return Err(invalid(
                "jobs",
                line,
                "Completion_Time",
                format!("{} is not a positive tick count", row.completion_time),
            ));
        }
        jobs.push(JobRecord {
            id: JobId(row.job_id),
            artist: ArtistId(row.artist_id),
            node: NodeId(row.node_id),
            duration: row.completion_time,
            cost: row.cost,
        });
    }
    debug!(table = "jobs", rows = jobs.len(), "read table");
    Ok(jobs)
}

/// Read both agent tables and validate them as one population.
pub fn read_population<A: Read, N: Read>(artists: A, nodes: N) -> Result<Population, TableError> {
    let artists = read_artists(artists)?;
    let nodes = read_nodes(nodes)?;
    Ok(Population::new(artists, nodes)?)
}

fn table_reader<R: Read>(
    source: R,
    table: &'static str,
    columns: &[&str],
) -> Result<csv::Reader<R>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    let found: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if found != columns {
        return Err(TableError::Header {
            table,
            expected: columns.iter().map(|c| c.to_string()).collect(),
            found,
        });
    }
    Ok(reader)
}

fn invalid(table: &'static str, row: usize, column: &'static str, detail: impl Display) -> TableError {
    TableError::InvalidValue {
        table,
        row,
        column,
        detail: detail.to_string(),
    }
}
