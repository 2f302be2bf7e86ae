//! Calculation history tracking.
//!
//! Provides immutable tracking of completed calculations, newest first,
//! plus the bar-chart series derived from the most recent results.

use super::numeral::{to_locale_string, to_numeral};
use super::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one completed calculation.
///
/// Items are immutable once created.
///
/// # Example
///
/// ```rust
/// use calcflow::core::{HistoryItem, Operator};
///
/// let item = HistoryItem::new(5.0, 0.0, Operator::Divide, 0.0);
/// assert_eq!(item.expression, "5 ÷ 0 =");
/// assert_eq!(item.result, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Unique, time-ordered identifier
    pub id: String,
    /// Human readable `"a op b ="`
    pub expression: String,
    /// Rounded result of the calculation
    pub result: f64,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Create an item for `first op second = result`, stamped now.
    pub fn new(first: f64, second: f64, op: Operator, result: f64) -> Self {
        Self::with_timestamp(first, second, op, result, Utc::now())
    }

    /// Create an item with an explicit timestamp.
    pub fn with_timestamp(
        first: f64,
        second: f64,
        op: Operator,
        result: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            expression: format!("{} {} {} =", to_numeral(first), op, to_numeral(second)),
            result,
            timestamp,
        }
    }

    /// Result text for the history list (`1,234.568`).
    pub fn result_text(&self) -> String {
        to_locale_string(self.result)
    }
}

/// Colour class of a chart bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarTone {
    /// Result is zero or above.
    Positive,
    /// Result is below zero.
    Negative,
}

impl BarTone {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// One bar of the history chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// 1-based position counted from the newest item
    pub index: usize,
    pub value: f64,
    /// Expression shown in the hover tooltip
    pub label: String,
    pub tone: BarTone,
}

/// Ordered calculation history, newest first.
///
/// History is immutable: [`record`](Self::record) and
/// [`cleared`](Self::cleared) return a new history.
///
/// # Example
///
/// ```rust
/// use calcflow::core::{History, HistoryItem, Operator};
///
/// let history = History::new();
/// let history = history.record(HistoryItem::new(2.0, 3.0, Operator::Add, 5.0));
/// let history = history.record(HistoryItem::new(5.0, 4.0, Operator::Add, 9.0));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|item| item.result), Some(9.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Prepend an item, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, item: HistoryItem) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self { items }
    }

    /// An empty history.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// All items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent item.
    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    /// Look an item up by id.
    pub fn find(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Chart series for the `window` most recent items, oldest first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcflow::core::{BarTone, History, HistoryItem, Operator};
    ///
    /// let history = History::new()
    ///     .record(HistoryItem::new(1.0, 1.0, Operator::Add, 2.0))
    ///     .record(HistoryItem::new(1.0, 4.0, Operator::Subtract, -3.0));
    ///
    /// let chart = history.chart(10);
    /// assert_eq!(chart.len(), 2);
    /// assert_eq!(chart[0].value, 2.0);
    /// assert_eq!(chart[0].index, 2);
    /// assert_eq!(chart[1].tone, BarTone::Negative);
    /// ```
    pub fn chart(&self, window: usize) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = self
            .items
            .iter()
            .take(window)
            .enumerate()
            .map(|(i, item)| ChartPoint {
                index: i + 1,
                value: item.result,
                label: item.expression.clone(),
                tone: BarTone::of(item.result),
            })
            .collect();
        points.reverse();
        points
    }
}
