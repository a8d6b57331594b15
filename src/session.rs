//! The editor session owned by the hosting view.
//!
//! Ties the headless [`Editor`] to the host surface and the event store:
//! idempotent initialization, the one-shot seat-summary read, auto-build
//! orchestration, and the save bridge that counts seat units and writes
//! `total_seats` back to the store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use thiserror::Error;
use tracing::{info, warn};

use crate::chart::{ChartError, ChartLayout, ChartState, SeatChart};
use crate::engine::Editor;
use crate::store::{EventId, EventStore, StoreError};
use crate::viewport::Point;

/// Session initialization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The host surface is not mounted yet; init was a safe no-op and may
    /// be retried after a remount.
    #[error("canvas surface not ready")]
    CanvasNotReady,
}

/// Description of the mounted canvas surface, supplied by the host.
#[derive(Debug, Clone, Copy)]
pub struct CanvasInfo {
    /// Canvas bounding origin in screen coordinates.
    pub origin: Point,
}

/// Result of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// `total_seats` was written to the store for the current event.
    Synced { event_id: EventId, total_seats: i64 },
    /// No current event is linked; the count was only reported locally.
    LocalOnly { total_seats: i64 },
}

/// One editor instance bound to (at most) one event record.
pub struct Session {
    pub editor: Editor,
    pub chart: ChartState,
    current_event: Option<EventId>,
    seat_summary: Option<i64>,
    initialized: bool,
}

impl Session {
    #[must_use]
    pub fn new(current_event: Option<EventId>) -> Self {
        Self {
            editor: Editor::new(),
            chart: ChartState::new(),
            current_event,
            seat_summary: None,
            initialized: false,
        }
    }

    /// Wire the session to a mounted surface and read the event's seat
    /// summary once. Repeated calls while initialized are no-ops, so the
    /// host can safely re-invoke after a teardown-and-rebuild without
    /// double-wiring anything.
    ///
    /// # Errors
    ///
    /// [`SessionError::CanvasNotReady`] if the surface is absent; no
    /// state changes and the host may retry by remounting.
    pub fn init<S: EventStore>(
        &mut self,
        canvas: Option<CanvasInfo>,
        store: &S,
    ) -> Result<(), SessionError> {
        if self.initialized {
            return Ok(());
        }
        let Some(canvas) = canvas else {
            warn!("seat planner surface missing; init aborted");
            return Err(SessionError::CanvasNotReady);
        };
        self.editor.set_canvas_origin(canvas.origin);
        self.seat_summary = self
            .current_event
            .and_then(|id| store.event(id))
            .and_then(|event| event.total_seats);
        self.initialized = true;
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The seat count read from the store at init, for the summary display.
    #[must_use]
    pub fn seat_summary(&self) -> Option<i64> {
        self.seat_summary
    }

    #[must_use]
    pub fn current_event(&self) -> Option<EventId> {
        self.current_event
    }

    /// Point the session at a different event (or none).
    pub fn set_current_event(&mut self, event: Option<EventId>) {
        self.current_event = event;
    }

    /// Auto-build the chart from the current event's configured seat count.
    ///
    /// # Errors
    ///
    /// [`ChartError::MissingSeatCount`] when there is no current event,
    /// the event is gone, or its count is absent or non-positive. No
    /// layout is performed in that case.
    pub fn auto_build<S: EventStore>(&mut self, store: &S) -> Result<&SeatChart, ChartError> {
        let count = self
            .current_event
            .and_then(|id| store.event(id))
            .and_then(|event| event.total_seats)
            .ok_or(ChartError::MissingSeatCount)?;
        self.chart.build(count)
    }

    /// Switch chart grouping; rebuilds from the last known count.
    pub fn set_chart_layout(&mut self, layout: ChartLayout) {
        self.chart.set_layout(layout);
    }

    /// Save the plan: count placed seat units and write the total back.
    /// Without a current event this degrades to a local-only result
    /// instead of failing. One-shot — no retry.
    ///
    /// # Errors
    ///
    /// Propagates the store's own failure writing `total_seats`.
    pub fn save<S: EventStore>(&mut self, store: &mut S) -> Result<SaveOutcome, StoreError> {
        let total_seats = i64::try_from(self.editor.seat_count()).unwrap_or(i64::MAX);
        match self.current_event {
            Some(event_id) => {
                store.update_total_seats(event_id, total_seats)?;
                info!(event = event_id, total_seats, "seat plan saved");
                Ok(SaveOutcome::Synced { event_id, total_seats })
            }
            None => {
                info!(total_seats, "seat plan saved locally; no event linked");
                Ok(SaveOutcome::LocalOnly { total_seats })
            }
        }
    }
}
