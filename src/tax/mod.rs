//! Pluggable corporate-tax estimation.
//!
//! Each country/year variant implements [`TaxEngine`] and is selected by a
//! configuration key such as `"FR-2025"`. The orchestrator never branches on
//! the jurisdiction itself; adding a tax year means adding an engine.

pub mod france_2025;

use crate::config::CitParams;
use crate::error::{AnalysisError, Result};
use std::collections::BTreeMap;

pub use france_2025::France2025TaxEngine;

/// Raw engine output, before the orchestrator folds in VAT and turnover to
/// build the full [`crate::schema::TaxEstimate`].
#[derive(Debug, Clone, PartialEq)]
pub struct TaxAssessment {
    /// None when turnover is unknown; otherwise the turnover-ceiling test.
    pub eligible_sme_reduced_rate: Option<bool>,
    pub corporate_income_tax: f64,
    pub social_contribution_on_cit: f64,
    pub notes: String,
    /// Intermediate bases and rates, keyed for display.
    pub details: BTreeMap<String, f64>,
}

pub trait TaxEngine {
    /// ISO country code of the jurisdiction this engine models.
    fn country(&self) -> &'static str;

    /// Fiscal year the rules apply to.
    fn year(&self) -> i32;

    /// Estimates corporate income tax and the associated surtaxes from a
    /// pre-tax profit and an optional annual turnover. Must be pure: same
    /// inputs, same assessment.
    fn estimate(
        &self,
        profit_before_tax: f64,
        turnover: Option<f64>,
        params: &CitParams,
    ) -> TaxAssessment;
}

/// Resolves a configuration key like `"FR-2025"` to its engine.
pub fn engine_for_key(key: &str) -> Result<Box<dyn TaxEngine>> {
    match key {
        "FR-2025" => Ok(Box::new(France2025TaxEngine)),
        other => Err(AnalysisError::UnknownTaxEngine(other.to_string())),
    }
}
