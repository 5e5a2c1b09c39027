use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

pub const MIN_INSTALLMENTS: u32 = 1;
pub const MAX_INSTALLMENTS: u32 = 6;

const MIN_CADENCE_MONTHS: u32 = 1;
const MAX_CADENCE_MONTHS: u32 = 3;

/// one payable slice of a contract's final total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub amount: Money,
    /// repayment interval in months, 1 to 3, editable per installment
    pub cadence_months: u32,
    /// nominal month offset consumed by monthly-cadence due dates
    pub months: u32,
    pub due_date: Option<DateTime<Utc>>,
}

impl Installment {
    fn monthly(amount: Money) -> Self {
        Self {
            amount,
            cadence_months: 1,
            months: 1,
            due_date: None,
        }
    }
}

/// split a final total into 1 to 6 even installments
///
/// Every installment but the last is the per-slice amount truncated to
/// the cent; the last receives the remainder, so the amounts sum to the
/// final total exactly with no cumulative drift. Out-of-range counts
/// are clamped.
pub fn distribute_evenly(final_total: Money, count: u32) -> Vec<Installment> {
    let count = count.clamp(MIN_INSTALLMENTS, MAX_INSTALLMENTS);
    let per_installment =
        Money::from_decimal_trunc(final_total.as_decimal() / Decimal::from(count));

    let mut installments = Vec::with_capacity(count as usize);
    for index in 0..count {
        let amount = if index == count - 1 {
            final_total - per_installment * Decimal::from(count - 1)
        } else {
            per_installment
        };
        installments.push(Installment::monthly(amount));
    }

    installments
}

/// due date for the installment at `index`
///
/// Monthly cadence advances the start date by the cumulative sum of the
/// `months` offsets up to and including `index`. Bimonthly and quarterly
/// cadences advance by `(index + 1) * cadence` instead, per-installment
/// rather than cumulative; real repayment plans count that way and the
/// asymmetry is kept exactly.
pub fn due_date_for(
    start_date: DateTime<Utc>,
    installments: &[Installment],
    index: usize,
) -> Option<DateTime<Utc>> {
    let installment = installments.get(index)?;
    let cadence = installment
        .cadence_months
        .clamp(MIN_CADENCE_MONTHS, MAX_CADENCE_MONTHS);

    let offset_months = if cadence == 1 {
        installments[..=index].iter().map(|i| i.months).sum()
    } else {
        (index as u32 + 1) * cadence
    };

    start_date.checked_add_months(Months::new(offset_months))
}

/// fill in the due date of every installment from the contract start
pub fn assign_due_dates(start_date: DateTime<Utc>, installments: &mut [Installment]) {
    for index in 0..installments.len() {
        let due = due_date_for(start_date, installments, index);
        installments[index].due_date = due;
    }
}

/// whether manually edited amounts still sum to the final total
///
/// The scheduler never re-normalizes edited amounts; callers use this to
/// surface a "does not balance" warning instead.
pub fn schedule_balances(installments: &[Installment], final_total: Money) -> bool {
    installments.iter().map(|i| i.amount).sum::<Money>() == final_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_even_split_sums_exactly() {
        let installments = distribute_evenly(Money::from_major(1000), 3);

        assert_eq!(installments[0].amount, Money::from_minor(33333));
        assert_eq!(installments[1].amount, Money::from_minor(33333));
        assert_eq!(installments[2].amount, Money::from_minor(33334));
        assert!(schedule_balances(&installments, Money::from_major(1000)));
    }

    #[test]
    fn test_exact_sum_invariant_across_counts() {
        let totals = [
            Money::from_minor(1),
            Money::from_minor(99),
            Money::from_major(1000),
            Money::from_minor(1234567),
            Money::ZERO,
        ];
        for total in totals {
            for count in MIN_INSTALLMENTS..=MAX_INSTALLMENTS {
                let installments = distribute_evenly(total, count);
                assert_eq!(installments.len(), count as usize);
                assert!(
                    schedule_balances(&installments, total),
                    "sum mismatch for {} in {} installments",
                    total,
                    count
                );
            }
        }
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(distribute_evenly(Money::from_major(100), 0).len(), 1);
        assert_eq!(distribute_evenly(Money::from_major(100), 12).len(), 6);
    }

    #[test]
    fn test_last_installment_absorbs_remainder_only() {
        let installments = distribute_evenly(Money::from_minor(100), 6);
        // 1.00 / 6 = 0.16 each, last takes 0.20
        for installment in &installments[..5] {
            assert_eq!(installment.amount, Money::from_minor(16));
        }
        assert_eq!(installments[5].amount, Money::from_minor(20));
    }

    #[test]
    fn test_monthly_due_dates_accumulate_offsets() {
        let mut installments = distribute_evenly(Money::from_major(900), 3);
        assign_due_dates(start(), &mut installments);

        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[1].due_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[2].due_date,
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_edited_month_offsets_shift_later_monthly_dues() {
        let mut installments = distribute_evenly(Money::from_major(900), 3);
        installments[1].months = 3;
        assign_due_dates(start(), &mut installments);

        // offsets 1, 1+3, 1+3+1
        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[1].due_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[2].due_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_quarterly_cadence_steps_by_position_not_accumulation() {
        let mut installments = distribute_evenly(Money::from_major(900), 3);
        for installment in installments.iter_mut() {
            installment.cadence_months = 3;
            // months offsets are ignored for non-monthly cadence
            installment.months = 7;
        }
        assign_due_dates(start(), &mut installments);

        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[1].due_date,
            Some(Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[2].due_date,
            Some(Utc.with_ymd_and_hms(2024, 10, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_mixed_cadence_is_per_installment() {
        let mut installments = distribute_evenly(Money::from_major(900), 3);
        installments[1].cadence_months = 2;
        assign_due_dates(start(), &mut installments);

        // index 0 and 2 are monthly and accumulate months offsets;
        // index 1 is bimonthly and steps by (1 + 1) * 2 = 4 months
        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[1].due_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[2].due_date,
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_cadence_outside_range_is_clamped() {
        let mut installments = distribute_evenly(Money::from_major(300), 1);
        installments[0].cadence_months = 9;
        assign_due_dates(start(), &mut installments);

        // clamped to quarterly: one step of 3 months
        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_month_end_due_dates_clamp_to_shorter_months() {
        let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let mut installments = distribute_evenly(Money::from_major(200), 2);
        assign_due_dates(jan31, &mut installments);

        // chrono clamps 31st to the last day of february
        assert_eq!(
            installments[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
        );
        assert_eq!(
            installments[1].due_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_due_date_for_out_of_range_index_is_none() {
        let installments = distribute_evenly(Money::from_major(100), 2);
        assert_eq!(due_date_for(start(), &installments, 5), None);
    }

    #[test]
    fn test_manual_edits_are_not_renormalized() {
        let mut installments = distribute_evenly(Money::from_major(1000), 2);
        installments[0].amount = Money::from_major(700);

        assert!(!schedule_balances(&installments, Money::from_major(1000)));
        // amounts stay exactly as edited
        assert_eq!(installments[0].amount, Money::from_major(700));
        assert_eq!(installments[1].amount, Money::from_major(500));
    }
}
