use crate::classifier::prefix_sum;
use crate::config::VatConfig;
use crate::schema::TrialBalanceRow;
use crate::utils::round2;

/// Below this combined magnitude the trial balance is considered to carry no
/// VAT accounts at all, and the balance is reported as absent rather than
/// zero. The threshold only absorbs floating-point noise.
const VAT_PRESENCE_EPSILON: f64 = 1e-6;

/// Net VAT position from the configured collected/deductible account buckets.
///
/// Returns `None` when neither bucket has any activity (VAT not applicable or
/// not in the export), distinguishing "no data" from a genuinely net-zero
/// balance. Otherwise: positive = VAT payable, negative = VAT credit carried
/// forward. VAT collected (44571) is a credit-balance account, hence the sign
/// flip on the collected sum.
pub fn compute_vat(rows: &[TrialBalanceRow], vat: &VatConfig) -> Option<f64> {
    let collected = prefix_sum(rows, &vat.collected_accounts_prefix);
    let deductible = prefix_sum(rows, &vat.deductible_accounts_prefix);

    if collected.abs() + deductible.abs() < VAT_PRESENCE_EPSILON {
        return None;
    }

    Some(round2(-collected - deductible))
}
