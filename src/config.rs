use crate::error::{AnalysisError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chart-of-accounts mapping: each semantic bucket is an ordered list of PCG
/// account-number prefixes. A row belongs to a bucket when its account code
/// starts with any of the bucket's prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PcgMapping {
    pub sales_prefix: Vec<String>,
    pub purchases_prefix: Vec<String>,
    pub external_charges_prefix: Vec<String>,
    pub taxes_prefix: Vec<String>,
    pub payroll_prefix: Vec<String>,
    pub depreciation_prefix: Vec<String>,
    pub financial_income_prefix: Vec<String>,
    pub financial_expenses_prefix: Vec<String>,
    pub exceptional_income_prefix: Vec<String>,
    pub exceptional_expenses_prefix: Vec<String>,
    pub cash_prefix: Vec<String>,
    pub receivables_prefix: Vec<String>,
    pub payables_prefix: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VatConfig {
    #[schemars(description = "Prefixes of VAT-collected accounts (44571 under the PCG)")]
    pub collected_accounts_prefix: Vec<String>,

    #[schemars(description = "Prefixes of deductible-VAT accounts (44566)")]
    pub deductible_accounts_prefix: Vec<String>,
}

/// Corporate income tax constants. Every threshold and rate is injected here
/// so that other tax years can ship as alternate engines without touching the
/// engine body. Defaults are the French FY2025 figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitParams {
    #[serde(default = "default_engine_key")]
    #[schemars(description = "Country/year engine variant to use, e.g. \"FR-2025\"")]
    pub engine: String,

    #[serde(default = "default_standard_rate")]
    pub standard_rate: f64,

    #[serde(default = "default_sme_reduced_rate")]
    pub sme_reduced_rate: f64,

    #[serde(default = "default_sme_reduced_threshold")]
    #[schemars(description = "Profit slice taxed at the reduced rate when eligible")]
    pub sme_reduced_threshold: f64,

    #[serde(default = "default_sme_turnover_ceiling")]
    #[schemars(description = "Turnover ceiling for SME reduced-rate eligibility")]
    pub sme_turnover_ceiling: f64,

    #[serde(default = "default_social_contribution_rate")]
    pub social_contribution_rate: f64,

    #[serde(default = "default_social_contribution_turnover_threshold")]
    pub social_contribution_turnover_threshold: f64,

    #[serde(default = "default_social_contribution_allowance")]
    pub social_contribution_allowance: f64,
}

fn default_engine_key() -> String {
    "FR-2025".to_string()
}

fn default_standard_rate() -> f64 {
    0.25
}

fn default_sme_reduced_rate() -> f64 {
    0.15
}

fn default_sme_reduced_threshold() -> f64 {
    42_500.0
}

fn default_sme_turnover_ceiling() -> f64 {
    10_000_000.0
}

fn default_social_contribution_rate() -> f64 {
    0.033
}

fn default_social_contribution_turnover_threshold() -> f64 {
    7_630_000.0
}

fn default_social_contribution_allowance() -> f64 {
    763_000.0
}

impl Default for CitParams {
    fn default() -> Self {
        Self {
            engine: default_engine_key(),
            standard_rate: default_standard_rate(),
            sme_reduced_rate: default_sme_reduced_rate(),
            sme_reduced_threshold: default_sme_reduced_threshold(),
            sme_turnover_ceiling: default_sme_turnover_ceiling(),
            social_contribution_rate: default_social_contribution_rate(),
            social_contribution_turnover_threshold: default_social_contribution_turnover_threshold(),
            social_contribution_allowance: default_social_contribution_allowance(),
        }
    }
}

/// Full analysis configuration. The three top-level sections are required;
/// a document missing any of them is rejected as a configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisParams {
    pub pcg_mapping: PcgMapping,
    pub vat: VatConfig,
    pub cit: CitParams,
}

impl AnalysisParams {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AnalysisError::Configuration(format!("invalid analysis config: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| AnalysisError::Configuration(format!("invalid analysis config: {e}")))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Standard French PCG mapping with FY2025 tax constants. Matches the
    /// shipped configuration document; useful for tests and callers without
    /// an external config source.
    pub fn standard_fr() -> Self {
        Self {
            pcg_mapping: PcgMapping {
                sales_prefix: vec!["70".into()],
                purchases_prefix: vec!["60".into()],
                external_charges_prefix: vec!["61".into(), "62".into()],
                taxes_prefix: vec!["63".into()],
                payroll_prefix: vec!["64".into()],
                depreciation_prefix: vec!["68".into()],
                financial_income_prefix: vec!["76".into()],
                financial_expenses_prefix: vec!["66".into()],
                exceptional_income_prefix: vec!["77".into()],
                exceptional_expenses_prefix: vec!["67".into()],
                cash_prefix: vec!["512".into(), "53".into()],
                receivables_prefix: vec!["411".into()],
                payables_prefix: vec!["401".into()],
            },
            vat: VatConfig {
                collected_accounts_prefix: vec!["44571".into()],
                deductible_accounts_prefix: vec!["44566".into()],
            },
            cit: CitParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_cit_defaults_are_fr_2025() {
        let cit = CitParams::default();
        assert_eq!(cit.standard_rate, 0.25);
        assert_eq!(cit.sme_reduced_rate, 0.15);
        assert_eq!(cit.sme_reduced_threshold, 42_500.0);
        assert_eq!(cit.sme_turnover_ceiling, 10_000_000.0);
        assert_eq!(cit.social_contribution_rate, 0.033);
        assert_eq!(cit.social_contribution_turnover_threshold, 7_630_000.0);
        assert_eq!(cit.social_contribution_allowance, 763_000.0);
        assert_eq!(cit.engine, "FR-2025");
    }

    #[test]
    fn test_missing_top_level_section_is_configuration_error() {
        let raw = r#"{ "pcg_mapping": null }"#;
        let err = AnalysisParams::from_json_str(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }

    #[test]
    fn test_partial_cit_section_fills_defaults() {
        let mut params = AnalysisParams::standard_fr();
        params.cit = serde_json::from_str(r#"{ "standard_rate": 0.28 }"#).unwrap();
        assert_eq!(params.cit.standard_rate, 0.28);
        assert_eq!(params.cit.sme_reduced_rate, 0.15);
    }

    #[test]
    fn test_standard_fr_roundtrips() {
        let params = AnalysisParams::standard_fr();
        let json = serde_json::to_string(&params).unwrap();
        let back = AnalysisParams::from_json_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
