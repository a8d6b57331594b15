//! Auto-build chart: a derived, read-only seat visualization.
//!
//! Distinct from the editable scene — chart seats are not shapes and take
//! no pointer interaction. The chart is built from an event's configured
//! seat count and regrouped when the layout mode flips; the host renders
//! [`SeatChart`] directly (or a placeholder prompt when there is none).

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{SEATS_PER_ROW, SEATS_PER_TABLE};

/// Why an auto-build was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The event has no usable seat count; nothing was laid out.
    #[error("no seat count configured for this event")]
    MissingSeatCount,
}

/// How chart seats are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLayout {
    /// Rows of [`SEATS_PER_ROW`], labeled `Row A`, `Row B`, …
    #[default]
    Rows,
    /// Tables of [`SEATS_PER_TABLE`], labeled `Table 1`, `Table 2`, …
    Tables,
}

impl ChartLayout {
    fn capacity(self) -> i64 {
        match self {
            Self::Rows => SEATS_PER_ROW,
            Self::Tables => SEATS_PER_TABLE,
        }
    }
}

/// One labeled group of seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBlock {
    pub label: String,
    pub seats: i64,
}

/// A generated chart: labeled groups in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatChart {
    pub layout: ChartLayout,
    pub blocks: Vec<ChartBlock>,
}

/// Chart panel state: layout preference, label visibility, the last seat
/// count built from, and the chart itself (`None` = placeholder prompt).
#[derive(Debug)]
pub struct ChartState {
    layout: ChartLayout,
    show_labels: bool,
    last_count: Option<i64>,
    chart: Option<SeatChart>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self { layout: ChartLayout::default(), show_labels: true, last_count: None, chart: None }
    }
}

impl ChartState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chart from a seat count.
    ///
    /// # Errors
    ///
    /// [`ChartError::MissingSeatCount`] for a non-positive count; the
    /// existing chart (if any) is left untouched.
    pub fn build(&mut self, total_seats: i64) -> Result<&SeatChart, ChartError> {
        if total_seats <= 0 {
            return Err(ChartError::MissingSeatCount);
        }
        self.last_count = Some(total_seats);
        Ok(&*self.chart.insert(build_chart(total_seats, self.layout)))
    }

    /// Switch the grouping mode; re-runs the build with the last known
    /// seat count when there is one.
    pub fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
        if let Some(count) = self.last_count {
            self.chart = Some(build_chart(count, layout));
        }
    }

    /// Flip label visibility, independent of layout; returns the new state.
    pub fn toggle_labels(&mut self) -> bool {
        self.show_labels = !self.show_labels;
        self.show_labels
    }

    /// Drop the chart back to the placeholder state, forgetting the last
    /// seat count. The host asks for confirmation before calling this.
    pub fn clear(&mut self) {
        self.chart = None;
        self.last_count = None;
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// The current chart, if one has been built.
    #[must_use]
    pub fn chart(&self) -> Option<&SeatChart> {
        self.chart.as_ref()
    }
}

fn build_chart(total_seats: i64, layout: ChartLayout) -> SeatChart {
    let capacity = layout.capacity();
    let mut blocks = Vec::new();
    let mut remaining = total_seats;
    let mut index = 0;
    while remaining > 0 {
        let seats = remaining.min(capacity);
        let label = match layout {
            ChartLayout::Rows => format!("Row {}", row_letters(index)),
            ChartLayout::Tables => format!("Table {}", index + 1),
        };
        blocks.push(ChartBlock { label, seats });
        remaining -= seats;
        index += 1;
    }
    SeatChart { layout, blocks }
}

/// Bijective base-26 row lettering: A..Z, then AA, AB, …
fn row_letters(index: usize) -> String {
    let mut n = index + 1;
    let mut out = String::new();
    while n > 0 {
        n -= 1;
        #[allow(clippy::cast_possible_truncation, reason = "n % 26 < 26")]
        out.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    out.chars().rev().collect()
}
