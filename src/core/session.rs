//! Load ordering for month navigation.
//!
//! Each navigation issues a ticket. A response is applied only when its
//! ticket still targets the current month and no newer ticket has been
//! applied; otherwise it is discarded. A failed load leaves the published
//! schedule untouched.

use tracing::{info, warn};

use crate::core::overrides::{OverrideKey, OverridePatch, OverrideStore};
use crate::core::schedule::{MonthSchedule, ScheduleSettings, build_month_schedule};
use crate::errors::AppResult;
use crate::source::{ScheduleInputs, ScheduleSource, load_inputs};
use crate::utils::date::month_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was built and published.
    Applied,
    /// The response targeted a month that is no longer current, or a newer
    /// response was already applied.
    Stale,
}

#[derive(Debug, Default)]
pub struct ScheduleSession {
    settings: ScheduleSettings,
    overrides: OverrideStore,
    current: Option<(i32, u32)>,
    next_seq: u64,
    applied_seq: Option<u64>,
    published: Option<MonthSchedule>,
}

impl ScheduleSession {
    pub fn new(settings: ScheduleSettings, overrides: OverrideStore) -> Self {
        Self {
            settings,
            overrides,
            ..Self::default()
        }
    }

    /// Switch the current month and get the ticket for its load.
    pub fn navigate(&mut self, year: i32, month: u32) -> LoadTicket {
        self.next_seq += 1;
        self.current = Some((year, month));
        LoadTicket {
            seq: self.next_seq,
            year,
            month,
        }
    }

    /// Hand in the response of a load started with `navigate`.
    pub fn complete(&mut self, ticket: LoadTicket, response: AppResult<ScheduleInputs>) -> AppResult<LoadOutcome> {
        let stale = self.current != Some((ticket.year, ticket.month))
            || self.applied_seq.is_some_and(|applied| applied >= ticket.seq);
        if stale {
            info!(
                month = %month_key(ticket.year, ticket.month),
                seq = ticket.seq,
                "discarding stale load response"
            );
            return Ok(LoadOutcome::Stale);
        }

        let inputs = response.inspect_err(|e| {
            warn!(month = %month_key(ticket.year, ticket.month), error = %e, "load failed, keeping previous schedule");
        })?;

        let schedule = build_month_schedule(&inputs, ticket.year, ticket.month, &self.settings, &self.overrides)?;
        self.published = Some(schedule);
        self.applied_seq = Some(ticket.seq);
        Ok(LoadOutcome::Applied)
    }

    /// Navigate and load synchronously from `source`.
    pub fn load<S: ScheduleSource + ?Sized>(&mut self, source: &S, year: i32, month: u32) -> AppResult<LoadOutcome> {
        let ticket = self.navigate(year, month);
        let response = load_inputs(source, year, month);
        self.complete(ticket, response)
    }

    pub fn published(&self) -> Option<&MonthSchedule> {
        self.published.as_ref()
    }

    pub fn into_published(self) -> Option<MonthSchedule> {
        self.published
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Store a patch and reapply overrides to the published schedule.
    pub fn set_override(&mut self, key: OverrideKey, patch: OverridePatch) {
        self.overrides.set_override(key, patch);
        self.reapply();
    }

    pub fn clear_override(&mut self, key: &OverrideKey) -> Option<OverridePatch> {
        let removed = self.overrides.remove(key);
        if removed.is_some() {
            self.reapply();
        }
        removed
    }

    fn reapply(&mut self) {
        if let Some(schedule) = self.published.as_mut() {
            schedule.reapply(&self.overrides);
        }
    }
}
