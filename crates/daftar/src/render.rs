//! Plain-text rendering of period reports for terminal display.
//!
//! The core produces typed reports only; all user-facing formatting lives
//! here.

use daftar_domain::{PeriodReport, Valuation};

/// Formats an amount with thousands separators, preserving the sign.
pub fn format_amount(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Renders a period report. Running periods get the partial layout with an
/// explicit "not entered yet" closing marker; closed (or previewed) periods
/// get the full profit breakdown.
pub fn render_report(report: &PeriodReport) -> String {
    let mut out = String::new();
    let title = if report.is_final() {
        "Final 15-day report"
    } else {
        "Current 15-day report"
    };
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "Period: {} -> {}\n\n",
        report.start_date, report.end_date
    ));
    out.push_str(&format!("Sales: {}\n", format_amount(report.sales)));
    out.push_str(&format!("  cash: {}\n", format_amount(report.cash)));
    out.push_str(&format!("  card: {}\n\n", format_amount(report.card)));
    out.push_str(&format!(
        "Purchases (at cost): {}\n",
        format_amount(report.purchases)
    ));
    out.push_str(&format!("Expenses: {}\n\n", format_amount(report.expenses)));
    out.push_str("Stock (at cost):\n");
    out.push_str(&format!(
        "  opening: {}\n",
        format_amount(report.opening_stock_cost)
    ));

    match report.valuation {
        Valuation::Pending => {
            out.push_str("  closing: not entered yet\n\n");
            out.push_str("Profit is computed once the closing stock cost is entered.\n");
        }
        Valuation::Closed {
            closing_stock_cost,
            cost_of_goods_sold,
            gross_profit,
            net_profit,
        } => {
            out.push_str(&format!(
                "  closing: {}\n\n",
                format_amount(closing_stock_cost)
            ));
            out.push_str(&format!(
                "COGS (cost of goods sold): {}\n",
                format_amount(cost_of_goods_sold)
            ));
            out.push_str(&format!("Gross profit: {}\n", format_amount(gross_profit)));
            out.push_str(&format!(
                "Net profit/loss: {}\n",
                format_amount(net_profit)
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daftar_core::ReportService;
    use daftar_domain::{OwnerId, Period, PeriodTotals};

    fn sample_period() -> Period {
        Period::open(
            1,
            OwnerId::new("shop"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            1_000_000,
        )
    }

    #[test]
    fn groups_digits_and_keeps_sign() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(950), "950");
        assert_eq!(format_amount(7_200_000), "7,200,000");
        assert_eq!(format_amount(-700_000), "-700,000");
        assert_eq!(format_amount(1_000), "1,000");
    }

    #[test]
    fn pending_report_marks_missing_closing_value() {
        let totals = PeriodTotals {
            cash: 1_200_000,
            card: 800_000,
            purchases: 3_500_000,
            expenses: 200_000,
        };
        let text = render_report(&ReportService::summarize(&sample_period(), &totals));
        assert!(text.contains("Current 15-day report"));
        assert!(text.contains("Sales: 2,000,000"));
        assert!(text.contains("closing: not entered yet"));
        assert!(!text.contains("COGS"));
    }

    #[test]
    fn final_report_shows_profit_breakdown() {
        let totals = PeriodTotals {
            cash: 1_200_000,
            card: 800_000,
            purchases: 3_500_000,
            expenses: 200_000,
        };
        let report = ReportService::summarize_with_closing(&sample_period(), &totals, 2_000_000)
            .expect("preview");
        let text = render_report(&report);
        assert!(text.contains("Final 15-day report"));
        assert!(text.contains("COGS (cost of goods sold): 2,500,000"));
        assert!(text.contains("Gross profit: -500,000"));
        assert!(text.contains("Net profit/loss: -700,000"));
    }
}
