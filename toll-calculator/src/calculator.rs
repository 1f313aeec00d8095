use {
    crate::{
        calendar::is_toll_free_date,
        error::TollError,
        report::DailyToll,
        schedule::{fee_at, DAILY_FEE_CAP, WINDOW_MINUTES},
        vehicle::VehicleClass,
    },
    chrono::NaiveDateTime,
    log::*,
};

/// Fee for a single passage with every exemption applied.
///
/// Exempt vehicles and toll-free dates pay nothing; otherwise the fee is read
/// from the time-of-day table.
pub fn fee_for_passage(vehicle: VehicleClass, passage: NaiveDateTime) -> u64 {
    if vehicle.is_toll_exempt() || is_toll_free_date(passage.date()) {
        return 0;
    }
    let fee = fee_at(passage.time());
    trace!("{vehicle} at {passage}: {fee}");
    fee
}

/// Calculate the total toll owed by `vehicle` for one day of `passages`.
///
/// # Algorithm
///
/// ```text
/// anchor = passages[0]
/// for passage in passages:
///     elapsed = whole minutes from anchor to passage
///     if elapsed < WINDOW_MINUTES:
///         window = max(window, fee(passage), fee(anchor))   (charged once)
///     else:
///         total += fee(passage)
/// return min(total, DAILY_FEE_CAP)
/// ```
///
/// Passages within the anchor window are charged once, at the highest fee
/// seen in that window. The anchor is never advanced: once a passage falls
/// outside the first window, every later passage is compared against the
/// first passage too and is therefore charged on its own.
///
/// # Preconditions
///
/// `passages` are expected to be in chronological order and on a single
/// calendar date. Neither is checked here and the result for other input is
/// unspecified; use [`validate_passages`] or [`calculate_daily_toll`] to
/// reject such input.
pub fn calculate_daily_fee(
    vehicle: VehicleClass,
    passages: &[NaiveDateTime],
) -> Result<u64, TollError> {
    let total = uncapped_daily_fee(vehicle, passages)?;
    Ok(total.min(DAILY_FEE_CAP))
}

/// Like [`calculate_daily_fee`], with the vehicle given as a class tag.
///
/// The tag is checked before the passages, so an empty tag with an empty
/// passage list reports [`TollError::InvalidVehicle`].
pub fn calculate_daily_fee_for_tag(
    vehicle_tag: &str,
    passages: &[NaiveDateTime],
) -> Result<u64, TollError> {
    let vehicle = vehicle_tag.parse::<VehicleClass>()?;
    calculate_daily_fee(vehicle, passages)
}

/// Check that `passages` describe one day: non-empty, chronologically
/// ordered and all on the same date.
pub fn validate_passages(passages: &[NaiveDateTime]) -> Result<(), TollError> {
    let Some(first) = passages.first() else {
        return Err(TollError::InvalidTimestamps);
    };
    let expected = first.date();
    for (index, pair) in passages.windows(2).enumerate() {
        let (previous, found) = (pair[0], pair[1]);
        if found < previous {
            return Err(TollError::UnorderedPassages {
                index: index.saturating_add(1),
                previous,
                found,
            });
        }
        if found.date() != expected {
            return Err(TollError::MultipleDays {
                expected,
                found: found.date(),
            });
        }
    }
    Ok(())
}

/// Validate `passages` and return the full breakdown for the day.
pub fn calculate_daily_toll(
    vehicle: VehicleClass,
    passages: &[NaiveDateTime],
) -> Result<DailyToll, TollError> {
    validate_passages(passages)?;
    let uncapped_fee = uncapped_daily_fee(vehicle, passages)?;
    let date = passages
        .first()
        .ok_or(TollError::InvalidTimestamps)?
        .date();
    let toll = DailyToll {
        date,
        vehicle,
        passages: passages.len(),
        toll_free_date: is_toll_free_date(date),
        uncapped_fee,
        fee: uncapped_fee.min(DAILY_FEE_CAP),
    };
    if toll.is_capped() {
        debug!("{vehicle} on {date}: {uncapped_fee} capped at {DAILY_FEE_CAP}");
    }
    Ok(toll)
}

fn uncapped_daily_fee(
    vehicle: VehicleClass,
    passages: &[NaiveDateTime],
) -> Result<u64, TollError> {
    let Some(&anchor) = passages.first() else {
        return Err(TollError::InvalidTimestamps);
    };
    // The anchor never moves, so its fee is fixed for the whole day.
    let anchor_fee = fee_for_passage(vehicle, anchor);

    let mut total: u64 = 0;
    let mut window_charge: u64 = 0;
    for &passage in passages {
        let entry_fee = fee_for_passage(vehicle, passage);
        let elapsed = passage.signed_duration_since(anchor).num_minutes();

        if elapsed < WINDOW_MINUTES {
            let charge = window_charge.max(entry_fee).max(anchor_fee);
            total = total.saturating_sub(window_charge).saturating_add(charge);
            debug!("{passage}: {elapsed} min after {anchor}, window charge {window_charge} -> {charge}");
            window_charge = charge;
        } else {
            total = total.saturating_add(entry_fee);
            debug!("{passage}: {elapsed} min after {anchor}, charged {entry_fee} separately");
        }
    }
    Ok(total)
}
