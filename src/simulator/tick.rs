//! One step of the live mutation simulator, as a pure function.
//!
//! [`apply_tick`] never touches its input: it returns a new collection, which the
//! actor then swaps in wholesale. Draws happen in a fixed order so a scripted
//! random source can pin the outcome:
//!
//! 1. arrival roll, then the arrival code index if the roll fired
//! 2. resolution roll, then the candidate index if the roll fired and a candidate exists
//!
//! An order is only a resolution candidate once its creation date is not after `today`.

use crate::config::SimulatorConfig;
use crate::model::{OrderRecord, StatusCatalog, StatusRole};
use crate::simulator::RandomSource;
use chrono::NaiveDate;

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub records: Vec<OrderRecord>,
    /// Id of the order that arrived, if any.
    pub arrived: Option<u64>,
    /// Id of the order that was resolved, if any.
    pub resolved: Option<u64>,
    /// Number of oldest orders dropped to respect the cap.
    pub evicted: usize,
}

impl TickOutcome {
    pub fn changed(&self) -> bool {
        self.arrived.is_some() || self.resolved.is_some() || self.evicted > 0
    }
}

/// Applies arrival, resolution and eviction to a copy of `records`.
pub fn apply_tick<R: RandomSource + ?Sized>(
    records: &[OrderRecord],
    catalog: &StatusCatalog,
    settings: &SimulatorConfig,
    rng: &mut R,
    today: NaiveDate,
) -> TickOutcome {
    let mut next = records.to_vec();

    let arrived = if rng.chance(settings.arrival_probability) {
        arrive(&mut next, catalog, rng, today)
    } else {
        None
    };

    let resolved = if rng.chance(settings.resolution_probability) {
        resolve(&mut next, catalog, rng, today)
    } else {
        None
    };

    let evicted = evict_oldest(&mut next, settings.max_records);

    TickOutcome {
        records: next,
        arrived,
        resolved,
        evicted,
    }
}

fn arrive<R: RandomSource + ?Sized>(
    records: &mut Vec<OrderRecord>,
    catalog: &StatusCatalog,
    rng: &mut R,
    today: NaiveDate,
) -> Option<u64> {
    let codes = catalog.arrival_codes();
    if codes.is_empty() {
        return None;
    }
    let code = codes[rng.index(codes.len())];
    let id = next_id(records);
    records.push(OrderRecord::opened(id, code, today, catalog));
    Some(id)
}

fn resolve<R: RandomSource + ?Sized>(
    records: &mut [OrderRecord],
    catalog: &StatusCatalog,
    rng: &mut R,
    today: NaiveDate,
) -> Option<u64> {
    let resolved_code = catalog.code_for_role(StatusRole::Resolved)?;
    let candidates: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| catalog.is_resolvable(r.code) && !r.is_finished())
        // finishing today must not precede creation
        .filter(|(_, r)| r.created_on().map_or(true, |created| created <= today))
        .map(|(i, _)| i)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let slot = candidates[rng.index(candidates.len())];
    records[slot] = records[slot].resolved(resolved_code, today);
    Some(records[slot].id)
}

/// One past the largest id in use, or 1 for an empty collection.
pub fn next_id(records: &[OrderRecord]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

/// Drops records from the front (oldest inserted) until at most `max` remain.
/// Returns how many were dropped.
pub fn evict_oldest(records: &mut Vec<OrderRecord>, max: usize) -> usize {
    let excess = records.len().saturating_sub(max);
    records.drain(..excess);
    excess
}
