use crate::config::PcgMapping;
use crate::schema::{BucketSums, TrialBalanceRow};

/// Sums the balance of every row whose account code starts with any of the
/// given prefixes. Exact-prefix, case-sensitive match on the trimmed code:
/// "512000" matches prefix "512", "999512" does not. An empty prefix list
/// matches nothing.
pub fn prefix_sum(rows: &[TrialBalanceRow], prefixes: &[String]) -> f64 {
    if prefixes.is_empty() {
        return 0.0;
    }
    rows.iter()
        .filter(|row| prefixes.iter().any(|p| row.account.starts_with(p.as_str())))
        .map(TrialBalanceRow::balance)
        .sum()
}

impl BucketSums {
    /// Classifies a normalized trial balance into the configured PCG buckets.
    ///
    /// Revenue, financial income and exceptional income are credit-balance
    /// account classes: under the `debit - credit` convention they sum to
    /// negative values, so they are sign-flipped here and every downstream
    /// formula works with economically-signed figures.
    pub fn classify(rows: &[TrialBalanceRow], pcg: &PcgMapping) -> Self {
        Self {
            revenue: -prefix_sum(rows, &pcg.sales_prefix),
            purchases: prefix_sum(rows, &pcg.purchases_prefix),
            external_charges: prefix_sum(rows, &pcg.external_charges_prefix),
            taxes: prefix_sum(rows, &pcg.taxes_prefix),
            payroll: prefix_sum(rows, &pcg.payroll_prefix),
            depreciation: prefix_sum(rows, &pcg.depreciation_prefix),
            financial_income: -prefix_sum(rows, &pcg.financial_income_prefix),
            financial_expenses: prefix_sum(rows, &pcg.financial_expenses_prefix),
            exceptional_income: -prefix_sum(rows, &pcg.exceptional_income_prefix),
            exceptional_expenses: prefix_sum(rows, &pcg.exceptional_expenses_prefix),
            cash: prefix_sum(rows, &pcg.cash_prefix),
            receivables: prefix_sum(rows, &pcg.receivables_prefix),
            payables: prefix_sum(rows, &pcg.payables_prefix),
        }
    }
}
