//! Property-based tests for the daily toll.
//!
//! Properties tested:
//! 1. The daily fee is always within [0, DAILY_FEE_CAP]
//! 2. Exempt vehicles and toll-free dates never pay
//! 3. Passages inside the first window are charged once, at their highest fee
//! 4. Appending a later passage never lowers the fee
//! 5. The calculation is pure and agrees with the validated report

#[cfg(test)]
mod tests {
    use {
        chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike},
        congestion_toll::{
            calculator::{calculate_daily_fee, calculate_daily_toll, fee_for_passage},
            calendar::is_toll_free_date,
            schedule::DAILY_FEE_CAP,
            VehicleClass,
        },
        proptest::prelude::*,
    };

    // ── Helpers ──

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    }

    fn passages_on(date: NaiveDate, mut seconds: Vec<u32>) -> Vec<NaiveDateTime> {
        seconds.sort_unstable();
        seconds
            .into_iter()
            .map(|s| date.and_time(NaiveTime::from_num_seconds_from_midnight_opt(s, 0).unwrap()))
            .collect()
    }

    fn vehicle() -> impl Strategy<Value = VehicleClass> {
        prop::sample::select(VehicleClass::ALL.to_vec())
    }

    fn exempt_vehicle() -> impl Strategy<Value = VehicleClass> {
        prop::sample::select(
            VehicleClass::ALL
                .into_iter()
                .filter(VehicleClass::is_toll_exempt)
                .collect::<Vec<_>>(),
        )
    }

    /// A sorted, non-empty day of passages somewhere in 2022–2024.
    fn day_of_passages() -> impl Strategy<Value = Vec<NaiveDateTime>> {
        (0u64..1096, prop::collection::vec(0u32..86_400, 1..40))
            .prop_map(|(offset, seconds)| passages_on(day(offset), seconds))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Fee bounds
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn daily_fee_never_exceeds_cap(vehicle in vehicle(), passages in day_of_passages()) {
            let fee = calculate_daily_fee(vehicle, &passages).unwrap();
            prop_assert!(fee <= DAILY_FEE_CAP, "fee {} above cap", fee);
        }

        #[test]
        fn single_passage_costs_its_table_fee(vehicle in vehicle(), passages in day_of_passages()) {
            let first = passages[0];
            let fee = calculate_daily_fee(vehicle, &[first]).unwrap();
            prop_assert_eq!(fee, fee_for_passage(vehicle, first));
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Exemptions
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn exempt_vehicles_pay_nothing(vehicle in exempt_vehicle(), passages in day_of_passages()) {
            prop_assert_eq!(calculate_daily_fee(vehicle, &passages).unwrap(), 0);
        }

        #[test]
        fn weekends_cost_nothing(
            week in 0u64..156,
            sunday in any::<bool>(),
            seconds in prop::collection::vec(0u32..86_400, 1..40),
        ) {
            // 2022-01-01 is a Saturday.
            let date = day(week * 7 + u64::from(sunday));
            prop_assert!(is_toll_free_date(date));
            let passages = passages_on(date, seconds);
            prop_assert_eq!(calculate_daily_fee(VehicleClass::Car, &passages).unwrap(), 0);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3. Window merging
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn first_window_is_charged_at_its_highest_fee(
            offset in 0u64..1096,
            start in 0u32..(86_400 - 3_600),
            gaps in prop::collection::vec(0u32..3_600, 1..20),
        ) {
            // Every passage lies less than 60 whole minutes after `start`.
            let seconds: Vec<u32> = gaps.iter().map(|gap| start + gap).chain([start]).collect();
            let passages = passages_on(day(offset), seconds);
            let highest = passages
                .iter()
                .map(|&passage| fee_for_passage(VehicleClass::Car, passage))
                .max()
                .unwrap();
            prop_assert_eq!(calculate_daily_fee(VehicleClass::Car, &passages).unwrap(), highest);
        }

        #[test]
        fn later_passage_never_lowers_fee(passages in day_of_passages(), extra in 0u32..86_400) {
            let last = passages[passages.len() - 1];
            let seconds = last.time().num_seconds_from_midnight().max(extra);
            let later = last
                .date()
                .and_time(NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap());

            let before = calculate_daily_fee(VehicleClass::Car, &passages).unwrap();
            let mut extended = passages.clone();
            extended.push(later);
            let after = calculate_daily_fee(VehicleClass::Car, &extended).unwrap();
            prop_assert!(after >= before, "fee dropped from {} to {}", before, after);
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 4. Purity
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #[test]
        fn daily_fee_is_idempotent(vehicle in vehicle(), passages in day_of_passages()) {
            let first = calculate_daily_fee(vehicle, &passages);
            let second = calculate_daily_fee(vehicle, &passages);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn report_agrees_with_daily_fee(vehicle in vehicle(), passages in day_of_passages()) {
            let toll = calculate_daily_toll(vehicle, &passages).unwrap();
            prop_assert_eq!(toll.fee, calculate_daily_fee(vehicle, &passages).unwrap());
            prop_assert_eq!(toll.fee, toll.uncapped_fee.min(DAILY_FEE_CAP));
            prop_assert_eq!(toll.passages, passages.len());
        }
    }
}
