//! Newline-delimited JSON ingestion into a fresh registry.

use crate::error::{IngestError, IngestResult};
use crate::models::NewContact;
use crate::registry::ContactRegistry;
use std::io::BufRead;
use tracing::{info, warn};

/// Outcome of ingesting a stream of contact requests.
#[derive(Debug, Default)]
pub struct IngestSummary {
    /// Registry holding every accepted contact
    pub registry: ContactRegistry,

    /// Number of lines that were malformed or rejected
    pub rejected: usize,
}

/// Read one `NewContact` JSON object per line and register each one.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns `IngestError::Io` if reading fails. With `fail_fast` set, the first
/// malformed or rejected line is returned as an error; otherwise it is logged
/// and counted in `IngestSummary::rejected`.
pub fn ingest<R: BufRead>(reader: R, fail_fast: bool) -> IngestResult<IngestSummary> {
    let mut summary = IngestSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let line_no = index + 1;
        let outcome = serde_json::from_str::<NewContact>(&line)
            .map_err(|source| IngestError::Malformed {
                line: line_no,
                source,
            })
            .and_then(|request| {
                summary
                    .registry
                    .register(request)
                    .map_err(|source| IngestError::Rejected {
                        line: line_no,
                        source,
                    })
            });

        if let Err(e) = outcome {
            if fail_fast {
                return Err(e);
            }
            warn!("Skipping input: {}", e);
            summary.rejected += 1;
        }
    }

    info!(
        "Ingested {} contacts ({} rejected)",
        summary.registry.len(),
        summary.rejected
    );
    Ok(summary)
}
