use super::{TaxAssessment, TaxEngine};
use crate::config::CitParams;
use crate::utils::round2;
use std::collections::BTreeMap;

/// French corporate income tax (IS), fiscal year 2025.
///
/// Simplifications, flagged to the caller in the assessment notes:
/// - IS is only computed on a positive result; losses yield a zero base (no
///   carry-forward modeling).
/// - SME reduced-rate eligibility checks the turnover ceiling only. The
///   statutory capital conditions (capital fully paid up, >= 75% held by
///   individuals) are left to the user to confirm.
pub struct France2025TaxEngine;

impl TaxEngine for France2025TaxEngine {
    fn country(&self) -> &'static str {
        "FR"
    }

    fn year(&self) -> i32 {
        2025
    }

    fn estimate(
        &self,
        profit_before_tax: f64,
        turnover: Option<f64>,
        params: &CitParams,
    ) -> TaxAssessment {
        let profit = profit_before_tax.max(0.0);

        let eligible = turnover.map(|t| t <= params.sme_turnover_ceiling);

        let reduced_base = if eligible == Some(true) {
            profit.min(params.sme_reduced_threshold)
        } else {
            0.0
        };
        let standard_base = profit - reduced_base;
        let cit = reduced_base * params.sme_reduced_rate + standard_base * params.standard_rate;

        let sc = match turnover {
            Some(t)
                if t > params.social_contribution_turnover_threshold
                    && cit > params.social_contribution_allowance =>
            {
                params.social_contribution_rate * (cit - params.social_contribution_allowance)
            }
            _ => 0.0,
        };

        let details = BTreeMap::from([
            ("reduced_base".to_string(), reduced_base),
            ("standard_base".to_string(), standard_base),
            ("standard_rate".to_string(), params.standard_rate),
            ("reduced_rate".to_string(), params.sme_reduced_rate),
            ("sc_rate".to_string(), params.social_contribution_rate),
        ]);

        TaxAssessment {
            eligible_sme_reduced_rate: eligible,
            corporate_income_tax: round2(cit),
            social_contribution_on_cit: round2(sc),
            notes: "Calcul pédagogique simplifié, à valider avec un expert-comptable.".to_string(),
            details,
        }
    }
}
