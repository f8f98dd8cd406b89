use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrialBalanceRow {
    #[schemars(
        description = "The ledger account code, trimmed. Under the PCG the numeric prefix implies the category (e.g. 7xx revenue, 6xx expenses)."
    )]
    pub account: String,

    #[schemars(description = "Optional human-readable account label from the export")]
    pub label: Option<String>,

    #[schemars(description = "Aggregated debit total for the period")]
    pub debit: f64,

    #[schemars(description = "Aggregated credit total for the period")]
    pub credit: f64,
}

impl TrialBalanceRow {
    /// Signed balance under the `debit - credit` convention used throughout
    /// the crate. Credit-balance accounts (revenue, VAT collected) come out
    /// negative here; callers flip the sign where the bucket demands it.
    pub fn balance(&self) -> f64 {
        self.debit - self.credit
    }
}

/// Bucket sums classified from a trial balance, already carrying their
/// economic sign: revenue, financial income and exceptional income are
/// credit-balance buckets and have been multiplied by -1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BucketSums {
    pub revenue: f64,
    pub purchases: f64,
    pub external_charges: f64,
    pub taxes: f64,
    pub payroll: f64,
    pub depreciation: f64,
    pub financial_income: f64,
    pub financial_expenses: f64,
    pub exceptional_income: f64,
    pub exceptional_expenses: f64,
    pub cash: f64,
    pub receivables: f64,
    pub payables: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Kpi {
    #[schemars(description = "Turnover derived from 7xx sales accounts (credit balance, sign-flipped)")]
    pub revenue: f64,

    #[schemars(description = "Revenue minus purchases (60x)")]
    pub gross_margin: f64,

    #[schemars(
        description = "EBITDA approximated from trial-balance buckets: revenue - purchases - external charges - taxes - payroll"
    )]
    pub ebitda_approx: f64,

    #[schemars(description = "EBITDA over revenue, in percent. None when revenue is zero.")]
    pub ebitda_margin_pct: Option<f64>,

    #[schemars(
        description = "Net result: EBITDA minus depreciation, plus financial and exceptional items"
    )]
    pub net_result: f64,

    #[schemars(description = "Working capital need (BFR): receivables minus payables")]
    pub working_capital_need: Option<f64>,

    #[schemars(description = "Days sales outstanding. Not derivable from a bare trial balance; reserved.")]
    pub dso_days: Option<f64>,

    #[schemars(description = "Days payable outstanding. Not derivable from a bare trial balance; reserved.")]
    pub dpo_days: Option<f64>,

    #[schemars(description = "Cash position from 512/53x accounts")]
    pub cash: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaxEstimate {
    #[schemars(description = "ISO country code of the tax jurisdiction")]
    pub country: String,

    #[schemars(description = "Fiscal year the rules apply to")]
    pub year: i32,

    pub profit_before_tax: f64,

    #[schemars(
        description = "Tri-state SME reduced-rate eligibility: None when turnover is unknown, otherwise the turnover-ceiling test. Capital-structure conditions are NOT checked."
    )]
    pub eligible_sme_reduced_rate: Option<bool>,

    pub turnover: Option<f64>,

    #[schemars(description = "Estimated corporate income tax (IS), rounded to 2 decimals")]
    pub corporate_income_tax: f64,

    #[schemars(description = "Social surtax of 3.3% on the IS above the allowance, when turnover exceeds the threshold")]
    pub social_contribution_on_cit: f64,

    #[schemars(
        description = "Net VAT position: positive means VAT payable, negative a VAT credit. None when no VAT accounts are present at all."
    )]
    pub vat_balance: Option<f64>,

    pub notes: Option<String>,

    #[schemars(description = "Intermediate bases and rates used by the engine, for display/audit")]
    pub details: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    #[schemars(description = "Stable rule code (e.g. EBITDA_LOW), usable for dedup and testing")]
    pub id: String,

    pub title: String,

    pub rationale: String,

    pub impact: Option<String>,

    #[schemars(description = "Official reference URLs backing the suggestion")]
    pub references: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub kpi: Kpi,
    pub tax: TaxEstimate,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub warnings: Vec<String>,
}
