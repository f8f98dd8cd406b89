//! # Trial Balance Advisor
//!
//! A library for analyzing an accounting trial balance exported from a French
//! ledger (PCG chart of accounts): it classifies accounts by configured
//! number prefixes, derives financial KPIs, estimates corporate income tax
//! (IS) and the net VAT position under French FY2025 rules, and produces
//! rule-based advisory suggestions.
//!
//! ## Core concepts
//!
//! - **Trial balance**: one row per ledger account with aggregated debit and
//!   credit totals; the signed balance convention is `debit - credit`.
//! - **Bucket classification**: account-number prefixes (e.g. `70` for sales)
//!   map rows to semantic buckets; credit-balance buckets are sign-flipped so
//!   downstream formulas see economically-signed figures.
//! - **Pluggable tax engines**: country/year variants behind the
//!   [`tax::TaxEngine`] trait, selected by a configuration key (`"FR-2025"`).
//! - **Soft degradation**: when the annual turnover is not supplied the
//!   analysis still completes, with SME-rate eligibility unknown and a
//!   warning attached instead of a failure.
//!
//! The whole pipeline is a pure, synchronous computation: no I/O (beyond the
//! optional config-file loader), no shared state, safe to call concurrently.
//!
//! ## Example
//!
//! ```rust,ignore
//! use trial_balance_advisor::*;
//!
//! let params = AnalysisParams::standard_fr();
//! let records: Vec<RawRecord> = serde_json::from_str(
//!     r#"[
//!         {"account": "701", "debit": 0, "credit": 100000},
//!         {"account": "6061", "debit": 40000, "credit": 0},
//!         {"account": "641", "debit": 20000, "credit": 0}
//!     ]"#,
//! )?;
//!
//! let result = analyze_trial_balance(&records, Some(100_000.0), &params)?;
//! assert_eq!(result.kpi.revenue, 100_000.0);
//! ```

pub mod advisor;
pub mod classifier;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod kpi;
pub mod schema;
pub mod tax;
pub mod utils;
pub mod vat;

pub use advisor::suggestions;
pub use classifier::prefix_sum;
pub use config::{AnalysisParams, CitParams, PcgMapping, VatConfig};
pub use error::{AnalysisError, Result};
pub use ingestion::{normalize_trial_balance, parse_amount, RawRecord};
pub use kpi::compute_kpi;
pub use schema::{AnalysisResult, BucketSums, Kpi, Suggestion, TaxEstimate, TrialBalanceRow};
pub use tax::{engine_for_key, France2025TaxEngine, TaxEngine};
pub use vat::compute_vat;

use log::{debug, info};

const TURNOVER_MISSING_WARNING: &str =
    "Le chiffre d'affaires n'a pas été fourni : l'éligibilité au taux réduit d'IS et la contribution sociale sont inférées de manière limitée.";

pub struct TrialBalanceAnalyzer;

impl TrialBalanceAnalyzer {
    /// Runs the full analysis pipeline over raw imported records:
    /// normalization, bucket classification, KPI derivation, corporate tax
    /// estimation (profit base = net result), VAT balance, advisory rules.
    ///
    /// Fails fast on malformed input or configuration; a missing `turnover`
    /// is not an error and instead degrades the tax estimate with a warning.
    pub fn analyze(
        records: &[RawRecord],
        turnover: Option<f64>,
        params: &AnalysisParams,
    ) -> Result<AnalysisResult> {
        info!(
            "Analyzing trial balance: {} records, turnover {}",
            records.len(),
            turnover.map_or_else(|| "unknown".to_string(), |t| t.to_string())
        );

        let rows = normalize_trial_balance(records)?;
        let sums = BucketSums::classify(&rows, &params.pcg_mapping);
        debug!("Classified bucket sums: {:?}", sums);

        let kpi = compute_kpi(&sums);

        let engine = engine_for_key(&params.cit.engine)?;
        debug!("Tax engine: {}-{}", engine.country(), engine.year());
        let assessment = engine.estimate(kpi.net_result, turnover, &params.cit);

        let vat_balance = compute_vat(&rows, &params.vat);

        let tax = TaxEstimate {
            country: engine.country().to_string(),
            year: engine.year(),
            profit_before_tax: kpi.net_result,
            eligible_sme_reduced_rate: assessment.eligible_sme_reduced_rate,
            turnover,
            corporate_income_tax: assessment.corporate_income_tax,
            social_contribution_on_cit: assessment.social_contribution_on_cit,
            vat_balance,
            notes: Some(assessment.notes),
            details: assessment.details,
        };

        let suggs = suggestions(&kpi, &tax, &sums);

        let mut warnings = Vec::new();
        if turnover.is_none() {
            debug!("Turnover not supplied; degrading SME eligibility and surtax to best effort");
            warnings.push(TURNOVER_MISSING_WARNING.to_string());
        }

        Ok(AnalysisResult {
            kpi,
            tax,
            suggestions: suggs,
            warnings,
        })
    }
}

/// Free-function entry point over [`TrialBalanceAnalyzer::analyze`].
pub fn analyze_trial_balance(
    records: &[RawRecord],
    turnover: Option<f64>,
    params: &AnalysisParams,
) -> Result<AnalysisResult> {
    TrialBalanceAnalyzer::analyze(records, turnover, params)
}

/// Convenience wrapper loading the configuration document from a JSON file
/// before running the analysis.
pub fn analyze_trial_balance_with_config_path<P: AsRef<std::path::Path>>(
    records: &[RawRecord],
    turnover: Option<f64>,
    config_path: P,
) -> Result<AnalysisResult> {
    let params = AnalysisParams::from_path(config_path)?;
    analyze_trial_balance(records, turnover, &params)
}
