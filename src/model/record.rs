//! A single service order as it flows through the dashboard.
//!
//! Dates are kept in their wire form (`YYYY-MM-DD` strings) because records may come
//! from outside the process. They are parsed on read; a date that does not parse is
//! treated as absent by every date-dependent computation instead of failing the
//! whole collection.
//!
//! There is no `status` field. The label is derived from `code` through a
//! [`StatusCatalog`] (see [`OrderRecord::status_name`]).

use crate::model::{RecordError, StatusCatalog, StatusRole};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a wire date, returning `None` for anything that is not a valid `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: u64,
    pub code: u16,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub finished_date: Option<String>,
    #[serde(default)]
    pub submitted_date: Option<String>,
    #[serde(default)]
    pub waiting_for_parts: bool,
}

impl OrderRecord {
    /// Creates a new order opened on `created`.
    ///
    /// # Notes
    /// `submitted_date` and `waiting_for_parts` are derived from the role of `code`,
    /// so callers cannot build an arrival that breaks the record invariants.
    pub fn opened(id: u64, code: u16, created: NaiveDate, catalog: &StatusCatalog) -> Self {
        let created = format_date(created);
        let submitted = catalog.has_role(code, StatusRole::Submitted);
        Self {
            id,
            code,
            submitted_date: submitted.then(|| created.clone()),
            created_date: Some(created),
            finished_date: None,
            waiting_for_parts: catalog.has_role(code, StatusRole::WaitingForParts),
        }
    }

    /// Returns a copy of this order moved into the terminal status on `finished`.
    pub fn resolved(&self, resolved_code: u16, finished: NaiveDate) -> Self {
        Self {
            code: resolved_code,
            finished_date: Some(format_date(finished)),
            waiting_for_parts: false,
            ..self.clone()
        }
    }

    pub fn status_name<'a>(&self, catalog: &'a StatusCatalog) -> Option<&'a str> {
        catalog.name_of(self.code)
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        present(&self.created_date).and_then(parse_date)
    }

    pub fn finished_on(&self) -> Option<NaiveDate> {
        present(&self.finished_date).and_then(parse_date)
    }

    pub fn submitted_on(&self) -> Option<NaiveDate> {
        present(&self.submitted_date).and_then(parse_date)
    }

    pub fn is_finished(&self) -> bool {
        present(&self.finished_date).is_some()
    }

    /// The day this order is charted on: the finish date when there is one,
    /// otherwise the creation date.
    ///
    /// A finish date that is present but unparseable makes the whole record
    /// undated; it does not fall back to the creation date.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        match present(&self.finished_date) {
            Some(raw) => parse_date(raw),
            None => self.created_on(),
        }
    }

    /// Whole days between creation and finish, if both dates are usable.
    pub fn wait_days(&self) -> Option<i64> {
        let created = self.created_on()?;
        let finished = self.finished_on()?;
        Some((finished - created).num_days())
    }

    /// Checks the record against the data-model invariants, reporting the first
    /// violation found.
    pub fn check(&self, catalog: &StatusCatalog) -> Result<(), RecordError> {
        let role = catalog
            .role_of(self.code)
            .ok_or(RecordError::UnknownCode { id: self.id, code: self.code })?;

        for (field, value) in [
            ("createdDate", &self.created_date),
            ("finishedDate", &self.finished_date),
            ("submittedDate", &self.submitted_date),
        ] {
            if let Some(raw) = present(value) {
                if parse_date(raw).is_none() {
                    return Err(RecordError::MalformedDate {
                        id: self.id,
                        field,
                        value: raw.to_string(),
                    });
                }
            }
        }

        if self.waiting_for_parts != (role == StatusRole::WaitingForParts) {
            return Err(RecordError::PartsFlagMismatch { id: self.id, code: self.code });
        }
        if self.is_finished() != (role == StatusRole::Resolved) {
            return Err(RecordError::FinishMismatch { id: self.id, code: self.code });
        }
        let submitted = present(&self.submitted_date).is_some();
        if submitted != (role == StatusRole::Submitted) {
            return Err(RecordError::SubmissionMismatch { id: self.id, code: self.code });
        }
        if let (Some(created), Some(finished)) = (self.created_on(), self.finished_on()) {
            if finished < created {
                return Err(RecordError::FinishedBeforeCreated { id: self.id });
            }
        }
        Ok(())
    }
}

// Empty strings count as absent, the same as a missing field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
