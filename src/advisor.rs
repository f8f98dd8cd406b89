use crate::schema::{BucketSums, Kpi, Suggestion, TaxEstimate};

/// Fixed battery of heuristic checks over the KPI set, the tax estimate and
/// the raw bucket sums. Each rule is independent and contributes at most one
/// suggestion; emission order is rule order, so the output is deterministic.
///
/// The titles, rationales and reference URLs are French advisory content and
/// travel with the rules as data.
pub fn suggestions(kpi: &Kpi, tax: &TaxEstimate, sums: &BucketSums) -> Vec<Suggestion> {
    let mut out = Vec::new();

    // Revenue fallback for the ratio rules: a zero-revenue balance must not
    // divide by zero, and 1 keeps the thresholds trivially crossable.
    let revenue_floor = if kpi.revenue != 0.0 { kpi.revenue } else { 1.0 };

    if matches!(kpi.ebitda_margin_pct, Some(m) if m < 10.0) {
        out.push(Suggestion {
            id: "EBITDA_LOW".to_string(),
            title: "Marge d'exploitation faible : prioriser pricing & achats".to_string(),
            rationale: "Votre EBITDA/CA est < 10%. Travaillez les prix (élasticité, mix) et renégociez achats (60/61/62). \
                        Vérifiez aussi la structure coûts fixes/variables."
                .to_string(),
            impact: Some("Amélioration directe du cash-flow opérationnel.".to_string()),
            references: None,
        });
    }

    if kpi.working_capital_need.unwrap_or(0.0) > 0.1 * revenue_floor {
        out.push(Suggestion {
            id: "WCR_HIGH".to_string(),
            title: "BFR élevé : accélérez l'encaissement et sécurisez les délais".to_string(),
            rationale: "Les créances clients dépassent les dettes fournisseurs. Mettez en place acomptes, relances \
                        systématiques, pénalités de retard, escompte/factoring, et préparez la facturation électronique (e-invoicing)."
                .to_string(),
            impact: Some("Réduction du besoin de financement court terme.".to_string()),
            references: None,
        });
    }

    if tax.eligible_sme_reduced_rate == Some(true) {
        out.push(Suggestion {
            id: "CIT_15_SME".to_string(),
            title: "Confirmez les critères pour le taux réduit d'IS à 15%".to_string(),
            rationale: "Si CA ≤ 10 M€, capital libéré et ≥ 75% détenu par des personnes physiques, la 1ère tranche de 42 500 € \
                        de bénéfice est imposée à 15% (reste à 25%). Assurez la conformité (cap table, libération du capital)."
                .to_string(),
            impact: None,
            references: Some(vec![
                "https://www.impots.gouv.fr/international-professionnel/tax4busines".to_string(),
                "https://bofip.impots.gouv.fr/bofip/2062-PGP.html/identifiant=BOI-IS-LIQ-20-10-20210303".to_string(),
            ]),
        });
    }

    let r_and_d_like = sums.external_charges + sums.payroll > 0.4 * revenue_floor;
    if r_and_d_like {
        out.push(Suggestion {
            id: "CIR_CII_CHECK".to_string(),
            title: "Vérifiez l'éligibilité CIR/CII".to_string(),
            rationale: "Poids élevé des charges de personnel et prestations techniques : vos projets peuvent être éligibles au CIR \
                        (30% métropole dans la limite de 100 M€) ou CII (20% PME jusqu'à fin 2027, sous conditions). \
                        Sécurisez via rescrit et dossier technique."
                .to_string(),
            impact: None,
            references: Some(vec![
                "https://entreprendre.service-public.fr/vosdroits/F23533".to_string(),
                "https://entreprendre.service-public.fr/vosdroits/F35494".to_string(),
            ]),
        });
    }

    if matches!(tax.vat_balance, Some(v) if v > 0.0) {
        out.push(Suggestion {
            id: "VAT_NET_PAYABLE".to_string(),
            title: "TVA à décaisser élevée : optimisez le cycle de TVA".to_string(),
            rationale: "Révisez les taux appliqués, maximisez la déductibilité (factures fournisseurs conformes), \
                        utilisez l'auto-liquidation si éligible. Anticipez le passage à la facturation électronique (2026/2027)."
                .to_string(),
            impact: None,
            references: Some(vec![
                "https://www.economie.gouv.fr/actualites/facturation-electronique-les-entreprises-accompagnees-tout-au-long-du-deploiement".to_string(),
            ]),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn base_kpi() -> Kpi {
        Kpi {
            revenue: 100_000.0,
            gross_margin: 60_000.0,
            ebitda_approx: 30_000.0,
            ebitda_margin_pct: Some(30.0),
            net_result: 30_000.0,
            working_capital_need: Some(0.0),
            dso_days: None,
            dpo_days: None,
            cash: Some(10_000.0),
        }
    }

    fn base_tax() -> TaxEstimate {
        TaxEstimate {
            country: "FR".to_string(),
            year: 2025,
            profit_before_tax: 30_000.0,
            eligible_sme_reduced_rate: None,
            turnover: None,
            corporate_income_tax: 7_500.0,
            social_contribution_on_cit: 0.0,
            vat_balance: None,
            notes: None,
            details: BTreeMap::new(),
        }
    }

    fn ids(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_quiet_when_no_rule_fires() {
        let out = suggestions(&base_kpi(), &base_tax(), &BucketSums::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_ebitda_low_fires_below_10_pct() {
        let mut kpi = base_kpi();
        kpi.ebitda_margin_pct = Some(9.9);
        let out = suggestions(&kpi, &base_tax(), &BucketSums::default());
        assert_eq!(ids(&out), vec!["EBITDA_LOW"]);

        kpi.ebitda_margin_pct = None;
        let out = suggestions(&kpi, &base_tax(), &BucketSums::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_wcr_high_fires_above_10_pct_of_revenue() {
        let mut kpi = base_kpi();
        kpi.working_capital_need = Some(10_001.0);
        let out = suggestions(&kpi, &base_tax(), &BucketSums::default());
        assert_eq!(ids(&out), vec!["WCR_HIGH"]);
    }

    #[test]
    fn test_wcr_zero_revenue_fallback() {
        let mut kpi = base_kpi();
        kpi.revenue = 0.0;
        kpi.ebitda_margin_pct = None;
        kpi.working_capital_need = Some(5.0);
        // Fallback denominator of 1: any positive BFR above 0.1 fires.
        let out = suggestions(&kpi, &base_tax(), &BucketSums::default());
        assert!(ids(&out).contains(&"WCR_HIGH"));
    }

    #[test]
    fn test_cit_15_sme_fires_only_on_true() {
        let mut tax = base_tax();

        tax.eligible_sme_reduced_rate = Some(true);
        let out = suggestions(&base_kpi(), &tax, &BucketSums::default());
        assert_eq!(ids(&out), vec!["CIT_15_SME"]);

        tax.eligible_sme_reduced_rate = Some(false);
        assert!(suggestions(&base_kpi(), &tax, &BucketSums::default()).is_empty());

        tax.eligible_sme_reduced_rate = None;
        assert!(suggestions(&base_kpi(), &tax, &BucketSums::default()).is_empty());
    }

    #[test]
    fn test_cir_cii_heuristic() {
        let sums = BucketSums {
            external_charges: 25_000.0,
            payroll: 20_000.0,
            ..BucketSums::default()
        };
        // 45_000 > 0.4 * 100_000
        let out = suggestions(&base_kpi(), &base_tax(), &sums);
        assert_eq!(ids(&out), vec!["CIR_CII_CHECK"]);
    }

    #[test]
    fn test_vat_net_payable_needs_positive_balance() {
        let mut tax = base_tax();

        tax.vat_balance = Some(1_000.0);
        let out = suggestions(&base_kpi(), &tax, &BucketSums::default());
        assert_eq!(ids(&out), vec!["VAT_NET_PAYABLE"]);

        tax.vat_balance = Some(0.0);
        assert!(suggestions(&base_kpi(), &tax, &BucketSums::default()).is_empty());

        tax.vat_balance = Some(-500.0);
        assert!(suggestions(&base_kpi(), &tax, &BucketSums::default()).is_empty());
    }

    #[test]
    fn test_emission_order_is_rule_order() {
        let mut kpi = base_kpi();
        kpi.ebitda_margin_pct = Some(5.0);
        kpi.working_capital_need = Some(50_000.0);
        let mut tax = base_tax();
        tax.eligible_sme_reduced_rate = Some(true);
        tax.vat_balance = Some(2_000.0);
        let sums = BucketSums {
            external_charges: 30_000.0,
            payroll: 30_000.0,
            ..BucketSums::default()
        };

        let out = suggestions(&kpi, &tax, &sums);
        assert_eq!(
            ids(&out),
            vec![
                "EBITDA_LOW",
                "WCR_HIGH",
                "CIT_15_SME",
                "CIR_CII_CHECK",
                "VAT_NET_PAYABLE"
            ]
        );
    }
}
