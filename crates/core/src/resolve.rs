//! Destination resolution for partially-specified job requests.
//!
//! Missing fields are defaulted from the catalog rather than rejected;
//! fan-outs win over connections because they represent an intentional
//! multi-destination routing policy, while a connection is a single
//! implicit link.

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};

/// Derive the effective `(source_id, destination_ids)` pair for a job.
///
/// Precedence for a missing destination list, in order:
/// 1. The full destination list of the first fan-out for the source.
/// 2. The destination of the first connection for the source.
/// 3. The first catalog destination.
///
/// Explicitly supplied, non-empty values pass through untouched. An
/// empty string or empty list counts as absent, matching the lenient
/// treatment of partially-filled requests.
pub fn resolve(
    catalog: &Catalog,
    requested_source_id: Option<String>,
    requested_destination_ids: Option<Vec<String>>,
) -> CoreResult<(String, Vec<String>)> {
    let source_id = match requested_source_id {
        Some(id) if !id.is_empty() => id,
        _ => default_source_id(catalog),
    };

    let destination_ids = match requested_destination_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => default_destination_ids(catalog, &source_id),
    };

    if destination_ids.is_empty() {
        return Err(CoreError::NoDestinationsAvailable);
    }

    Ok((source_id, destination_ids))
}

/// The default source: the first fan-out's source if any fan-out
/// exists, else the first connection's source, else empty.
fn default_source_id(catalog: &Catalog) -> String {
    if let Some(fanout) = catalog.fanouts().first() {
        return fanout.source_id.clone();
    }

    if let Some(conn) = catalog.connections().first() {
        return conn.source_id.clone();
    }

    String::new()
}

/// Default destinations for a source, applying the fan-out >
/// connection > any-destination precedence.
///
/// Fan-out lists are cloned so job records never alias catalog
/// storage.
fn default_destination_ids(catalog: &Catalog, source_id: &str) -> Vec<String> {
    if let Some(fanout) = catalog
        .fanouts()
        .iter()
        .find(|f| f.source_id == source_id)
    {
        return fanout.destination_ids.clone();
    }

    if let Some(conn) = catalog
        .connections()
        .iter()
        .find(|c| c.source_id == source_id)
    {
        return vec![conn.destination_id.clone()];
    }

    if let Some(dest) = catalog.destinations().first() {
        return vec![dest.id.clone()];
    }

    Vec::new()
}
