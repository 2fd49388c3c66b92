//! Core types for the RenderNet marketplace simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: typed IDs,
//! participant attributes, job records, the allocation policy, and
//! configuration errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attrs;
pub mod error;
pub mod id;
pub mod job;
pub mod policy;

pub use attrs::{ParseAttributeError, PricingTier, ProjectSize, Urgency};
pub use error::ConfigError;
pub use id::{ArtistId, JobId, NodeId, TickId};
pub use job::JobRecord;
pub use policy::{AllocationPolicy, Quote};
