//! Render models handed to the host UI.
//!
//! These are plain data; the host decides how to draw them.

use crate::core::{ChartPoint, History};
use crate::input::Keypad;
use serde::Serialize;

/// Main readout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayModel {
    /// Formatted value
    pub value: String,
    /// `"<first> <op>"` while an operator is pending, otherwise empty
    pub expression: String,
}

/// One clickable history entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryRow {
    pub id: String,
    pub expression: String,
    pub result: f64,
    pub result_text: String,
}

/// Placeholder copy shown when there is no history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub const DEFAULT: EmptyState = EmptyState {
        title: "No calculations yet",
        hint: "Start calculating to see your history and analytics.",
    };
}

/// History list plus chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryPanelModel {
    pub rows: Vec<HistoryRow>,
    pub chart: Vec<ChartPoint>,
    /// Whether the clear control is offered
    pub can_clear: bool,
    /// Present only when there is no history
    pub empty: Option<EmptyState>,
}

impl HistoryPanelModel {
    pub fn build(history: &History, chart_window: usize) -> Self {
        let rows = history
            .items()
            .iter()
            .map(|item| HistoryRow {
                id: item.id.clone(),
                expression: item.expression.clone(),
                result: item.result,
                result_text: item.result_text(),
            })
            .collect();
        Self {
            rows,
            chart: history.chart(chart_window),
            can_clear: !history.is_empty(),
            empty: history.is_empty().then_some(EmptyState::DEFAULT),
        }
    }
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Screen {
    pub display: DisplayModel,
    pub keypad: Keypad,
    pub history: HistoryPanelModel,
    /// Whether the history panel is shown on compact layouts
    pub history_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryItem, Operator};

    #[test]
    fn empty_history_panel() {
        let panel = HistoryPanelModel::build(&History::new(), 10);
        assert!(panel.rows.is_empty());
        assert!(panel.chart.is_empty());
        assert!(!panel.can_clear);
        assert_eq!(panel.empty, Some(EmptyState::DEFAULT));
    }

    #[test]
    fn populated_history_panel() {
        let history = History::new()
            .record(HistoryItem::new(1000.0, 500.25, Operator::Add, 1500.25))
            .record(HistoryItem::new(1.0, 2.0, Operator::Subtract, -1.0));
        let panel = HistoryPanelModel::build(&history, 10);

        assert!(panel.can_clear);
        assert!(panel.empty.is_none());
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.rows[0].expression, "1 - 2 =");
        assert_eq!(panel.rows[1].result_text, "1,500.25");
        assert_eq!(panel.chart.len(), 2);
        assert_eq!(panel.chart[1].value, -1.0);
    }
}
