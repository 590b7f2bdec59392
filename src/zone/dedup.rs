use std::collections::HashMap;

use super::{
    error::ZoneError,
    record::{AddressHostnamePair, TypedRecord},
};

/// Decides which of several records sharing one address survives.
pub trait Resolver {
    /// Returns the index into `candidates` of the record to keep.
    fn choose(&mut self, address: &str, candidates: &[&TypedRecord]) -> Result<usize, ZoneError>;
}

/// Collapses records to one per address.
///
/// Unique addresses pass straight through in input order. Every address seen
/// more than once is handed to `resolver` once, in the order the addresses
/// were first met, and the chosen record is appended after all the unique ones.
pub fn deduplicate(
    records: &[TypedRecord],
    resolver: &mut dyn Resolver,
) -> Result<Vec<AddressHostnamePair>, ZoneError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.address()).or_insert(0) += 1;
    }

    let mut unique = Vec::new();
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&TypedRecord>> = HashMap::new();

    for record in records {
        let address = record.address();
        if counts.get(address).copied().unwrap_or(0) > 1 {
            groups
                .entry(address)
                .or_insert_with(|| {
                    group_order.push(address);
                    Vec::new()
                })
                .push(record);
        } else {
            unique.push(record.to_pair());
        }
    }

    for address in group_order {
        let candidates = groups.get(address).map(Vec::as_slice).unwrap_or_default();
        unique.push(resolve_group(address, candidates, resolver)?);
    }

    Ok(unique)
}

fn resolve_group(
    address: &str,
    candidates: &[&TypedRecord],
    resolver: &mut dyn Resolver,
) -> Result<AddressHostnamePair, ZoneError> {
    if candidates.is_empty() {
        return Err(ZoneError::InternalInvariantViolation(format!(
            "no candidates collected for duplicated address {address}"
        )));
    }

    let index = resolver.choose(address, candidates)?;
    candidates
        .get(index)
        .map(|record| record.to_pair())
        .ok_or_else(|| ZoneError::InvalidSelection {
            input: index.to_string(),
            candidates: candidates.len(),
        })
}
