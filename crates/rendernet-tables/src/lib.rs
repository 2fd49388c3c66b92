//! CSV persistence for RenderNet data sets.
//!
//! Three tables cross the system boundary, each with an exact column
//! contract:
//!
//! | Table | Columns |
//! |-------|---------|
//! | `artists` | `Artist_ID, Project_Size, Urgency` |
//! | `nodes` | `Node_ID, Pricing_Tier, Bandwidth, Availability` |
//! | `jobs` | `Job_ID, Artist_ID, Node_ID, Completion_Time, Cost` |
//!
//! The `read_*` / `write_*` functions work on any `Read` / `Write`;
//! [`DataDir`] binds them to `artists.csv`, `nodes.csv` and `jobs.csv`
//! inside one directory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dir;
pub mod error;
pub mod table;

pub use dir::DataDir;
pub use error::TableError;
pub use table::{
    read_artists, read_jobs, read_nodes, read_population, write_artists, write_jobs, write_nodes,
    ARTIST_COLUMNS, JOB_COLUMNS, NODE_COLUMNS,
};
