//! Pure financial summary computation.

use daftar_domain::{Period, PeriodReport, PeriodTotals, Valuation};

use crate::{error::ensure_non_negative, CoreError};

/// Derives financial summaries from a period and its aggregated totals.
/// No side effects, no I/O; deterministic given its inputs.
pub struct ReportService;

impl ReportService {
    /// Summarizes the period. While no closing valuation exists the report
    /// carries a pending valuation and no profit figures.
    pub fn summarize(period: &Period, totals: &PeriodTotals) -> PeriodReport {
        match period.closing_stock_cost {
            Some(closing) => Self::with_valuation(period, totals, closing),
            None => Self::report_shell(period, totals, Valuation::Pending),
        }
    }

    /// Summarizes with a hypothetical closing valuation, previewing the
    /// profit figures without closing the period.
    pub fn summarize_with_closing(
        period: &Period,
        totals: &PeriodTotals,
        closing_stock_cost: i64,
    ) -> Result<PeriodReport, CoreError> {
        ensure_non_negative(closing_stock_cost, "closing stock cost")?;
        Ok(Self::with_valuation(period, totals, closing_stock_cost))
    }

    fn with_valuation(period: &Period, totals: &PeriodTotals, closing: i64) -> PeriodReport {
        let sales = totals.sales();
        // COGS goes negative when inventory grew; the sign is preserved.
        let cost_of_goods_sold = period.opening_stock_cost + totals.purchases - closing;
        let gross_profit = sales - cost_of_goods_sold;
        let net_profit = gross_profit - totals.expenses;
        Self::report_shell(
            period,
            totals,
            Valuation::Closed {
                closing_stock_cost: closing,
                cost_of_goods_sold,
                gross_profit,
                net_profit,
            },
        )
    }

    fn report_shell(period: &Period, totals: &PeriodTotals, valuation: Valuation) -> PeriodReport {
        PeriodReport {
            period_id: period.id,
            start_date: period.start_date,
            end_date: period.end_date,
            cash: totals.cash,
            card: totals.card,
            sales: totals.sales(),
            purchases: totals.purchases,
            expenses: totals.expenses,
            opening_stock_cost: period.opening_stock_cost,
            valuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daftar_domain::{OwnerId, Period};

    fn period_with_opening(opening: i64) -> Period {
        Period::open(
            1,
            OwnerId::new("shop"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            opening,
        )
    }

    #[test]
    fn open_period_without_closing_yields_pending_valuation() {
        let period = period_with_opening(1_000_000);
        let totals = PeriodTotals {
            cash: 500_000,
            card: 250_000,
            purchases: 100_000,
            expenses: 40_000,
        };

        let report = ReportService::summarize(&period, &totals);
        assert!(report.valuation.is_pending());
        assert!(!report.is_final());
        assert_eq!(report.sales, 750_000);
        assert_eq!(report.opening_stock_cost, 1_000_000);
    }

    #[test]
    fn loss_scenario_preserves_negative_profit() {
        let period = period_with_opening(1_000_000);
        let totals = PeriodTotals {
            cash: 1_200_000,
            card: 800_000,
            purchases: 3_500_000,
            expenses: 200_000,
        };

        let report = ReportService::summarize_with_closing(&period, &totals, 2_000_000)
            .expect("preview succeeds");
        match report.valuation {
            Valuation::Closed {
                cost_of_goods_sold,
                gross_profit,
                net_profit,
                closing_stock_cost,
            } => {
                assert_eq!(closing_stock_cost, 2_000_000);
                assert_eq!(cost_of_goods_sold, 2_500_000);
                assert_eq!(gross_profit, -500_000);
                assert_eq!(net_profit, -700_000);
            }
            Valuation::Pending => panic!("expected final valuation"),
        }
    }

    #[test]
    fn negative_cogs_when_inventory_grew_is_not_clamped() {
        let period = period_with_opening(100_000);
        let totals = PeriodTotals {
            cash: 0,
            card: 0,
            purchases: 0,
            expenses: 0,
        };

        let report = ReportService::summarize_with_closing(&period, &totals, 900_000)
            .expect("preview succeeds");
        match report.valuation {
            Valuation::Closed {
                cost_of_goods_sold, ..
            } => assert_eq!(cost_of_goods_sold, -800_000),
            Valuation::Pending => panic!("expected final valuation"),
        }
    }

    #[test]
    fn negative_hypothetical_closing_is_rejected() {
        let period = period_with_opening(100_000);
        let totals = PeriodTotals::default();
        let err = ReportService::summarize_with_closing(&period, &totals, -1)
            .expect_err("negative closing must fail");
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
