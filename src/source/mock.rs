use crate::model::{OrderRecord, StatusCatalog, StatusRole};
use crate::simulator::{Clock, RandomSource, SeededRandom, SystemClock};
use crate::source::{RecordSource, SourceError};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Generates a plausible order history ending today.
///
/// For each day, two to five orders are opened. Roughly 35% stay new, 20% wait for
/// parts, 25% are submitted and the remaining 20% are already solved, on the same
/// day or the next (never later than `today`).
pub struct MockSource {
    catalog: StatusCatalog,
    days: u32,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RandomSource>,
}

impl MockSource {
    pub fn new(catalog: StatusCatalog, days: u32) -> Self {
        Self {
            catalog,
            days,
            clock: Arc::new(SystemClock),
            rng: Box::new(SeededRandom::from_entropy()),
        }
    }

    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    #[instrument(skip(self), fields(days = self.days))]
    async fn load(&mut self) -> Result<Vec<OrderRecord>, SourceError> {
        let today = self.clock.today();
        let records = generate_history(&self.catalog, self.days, today, self.rng.as_mut());
        debug!(count = records.len(), %today, "Generated mock history");
        Ok(records)
    }
}

/// Builds `days` days of history, oldest day first, with ids counting up from 1.
pub fn generate_history<R: RandomSource + ?Sized>(
    catalog: &StatusCatalog,
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<OrderRecord> {
    let mut records = Vec::new();
    let mut id = 1;

    for offset in (0..days).rev() {
        let Some(date) = today.checked_sub_days(Days::new(offset.into())) else {
            continue;
        };
        let opened = 2 + rng.index(4);
        for _ in 0..opened {
            let role = match rng.unit() {
                roll if roll < 0.35 => StatusRole::New,
                roll if roll < 0.55 => StatusRole::WaitingForParts,
                roll if roll < 0.8 => StatusRole::Submitted,
                _ => StatusRole::Resolved,
            };
            let Some(code) = catalog.code_for_role(role) else {
                continue;
            };

            let record = if role == StatusRole::Resolved {
                let delay = rng.index(2) as u64;
                let finished = date
                    .checked_add_days(Days::new(delay))
                    .map_or(date, |d| d.min(today));
                let opened_as = catalog.code_for_role(StatusRole::New).unwrap_or(code);
                OrderRecord::opened(id, opened_as, date, catalog).resolved(code, finished)
            } else {
                OrderRecord::opened(id, code, date, catalog)
            };
            records.push(record);
            id += 1;
        }
    }
    records
}
