//! Derived financial summaries for a period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inventory valuation state carried by a [`PeriodReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Valuation {
    /// Closing stock has not been entered yet; profit is not computable.
    Pending,
    /// Closing stock is known and the profit figures are final.
    Closed {
        closing_stock_cost: i64,
        cost_of_goods_sold: i64,
        gross_profit: i64,
        net_profit: i64,
    },
}

impl Valuation {
    pub fn is_pending(&self) -> bool {
        matches!(self, Valuation::Pending)
    }
}

/// Financial summary derived from a period and its aggregated totals.
///
/// Cost of goods sold may be negative (inventory grew) and net profit may be
/// negative (loss); neither is ever clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cash: i64,
    pub card: i64,
    pub sales: i64,
    pub purchases: i64,
    pub expenses: i64,
    pub opening_stock_cost: i64,
    pub valuation: Valuation,
}

impl PeriodReport {
    pub fn is_final(&self) -> bool {
        !self.valuation.is_pending()
    }
}
