pub mod classify;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod linkage;
pub mod pipeline;
pub mod rules;

pub use classify::{partition, ClientKind, Partition};
pub use domain::*;
pub use error::CoreError;
pub use ingest::{
    CellValue, IngestReport, OwnerHeaders, OwnerRow, PropertyHeaders, PropertyRow, RowSkip,
};
pub use linkage::{link, LinkReport, Linkage};
pub use pipeline::{LeadOutcome, LeadPipeline, LeadReport, QualifyReport};
pub use rules::*;
