use crate::schema::{BucketSums, Kpi};
use crate::utils::round2;

/// Derives the KPI set from classified bucket sums.
///
/// Total over any well-formed input: never fails, and the only `None` it ever
/// produces is `ebitda_margin_pct` when revenue is exactly zero (the
/// divide-by-zero case). All monetary outputs are rounded to 2 decimals.
pub fn compute_kpi(sums: &BucketSums) -> Kpi {
    let gross_margin = sums.revenue - sums.purchases;
    let ebitda_approx =
        sums.revenue - sums.purchases - sums.external_charges - sums.taxes - sums.payroll;
    let net_result = ebitda_approx - sums.depreciation + sums.financial_income
        - sums.financial_expenses
        + sums.exceptional_income
        - sums.exceptional_expenses;
    let working_capital_need = sums.receivables - sums.payables;

    let ebitda_margin_pct = if sums.revenue != 0.0 {
        Some(round2(ebitda_approx / sums.revenue * 100.0))
    } else {
        None
    };

    Kpi {
        revenue: round2(sums.revenue),
        gross_margin: round2(gross_margin),
        ebitda_approx: round2(ebitda_approx),
        ebitda_margin_pct,
        net_result: round2(net_result),
        working_capital_need: Some(round2(working_capital_need)),
        // DSO/DPO need period sales and purchase flows with dates, which a
        // bare trial balance does not carry.
        dso_days: None,
        dpo_days: None,
        cash: Some(round2(sums.cash)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_formulas() {
        let sums = BucketSums {
            revenue: 100_000.0,
            purchases: 40_000.0,
            external_charges: 5_000.0,
            taxes: 2_000.0,
            payroll: 20_000.0,
            depreciation: 3_000.0,
            financial_income: 500.0,
            financial_expenses: 1_500.0,
            exceptional_income: 0.0,
            exceptional_expenses: 200.0,
            cash: 15_000.0,
            receivables: 30_000.0,
            payables: 18_000.0,
        };

        let kpi = compute_kpi(&sums);
        assert_eq!(kpi.revenue, 100_000.0);
        assert_eq!(kpi.gross_margin, 60_000.0);
        assert_eq!(kpi.ebitda_approx, 33_000.0);
        assert_eq!(kpi.ebitda_margin_pct, Some(33.0));
        // 33000 - 3000 + 500 - 1500 + 0 - 200
        assert_eq!(kpi.net_result, 28_800.0);
        assert_eq!(kpi.working_capital_need, Some(12_000.0));
        assert_eq!(kpi.cash, Some(15_000.0));
        assert_eq!(kpi.dso_days, None);
        assert_eq!(kpi.dpo_days, None);
    }

    #[test]
    fn test_zero_revenue_margin_is_none() {
        let sums = BucketSums {
            payroll: 10_000.0,
            ..BucketSums::default()
        };

        let kpi = compute_kpi(&sums);
        assert_eq!(kpi.revenue, 0.0);
        assert_eq!(kpi.ebitda_margin_pct, None);
        assert_eq!(kpi.ebitda_approx, -10_000.0);
    }

    #[test]
    fn test_negative_revenue_still_computes_margin() {
        // Sign-flipped revenue can come out negative on a pathological
        // export; the margin divides anyway, None is only for exact zero.
        let sums = BucketSums {
            revenue: -1_000.0,
            ..BucketSums::default()
        };

        let kpi = compute_kpi(&sums);
        assert_eq!(kpi.ebitda_margin_pct, Some(100.0));
    }
}
