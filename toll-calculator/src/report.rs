use {
    crate::{schedule::DAILY_FEE_CAP, vehicle::VehicleClass},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Outcome of charging one vehicle for one day of passages.
///
/// Produced by [`crate::calculator::calculate_daily_toll`], which only accepts
/// chronologically ordered passages from a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyToll {
    /// Calendar date all passages fall on.
    pub date: NaiveDate,
    pub vehicle: VehicleClass,
    /// Number of passages charged.
    pub passages: usize,
    /// Whether the date itself is toll-free (weekend or holiday).
    pub toll_free_date: bool,
    /// Sum of the window charges before the daily cap is applied.
    pub uncapped_fee: u64,
    /// Amount owed: `min(uncapped_fee, DAILY_FEE_CAP)`.
    pub fee: u64,
}

impl DailyToll {
    /// Whether the daily cap reduced the amount owed.
    #[inline]
    pub fn is_capped(&self) -> bool {
        self.uncapped_fee > DAILY_FEE_CAP
    }
}

impl fmt::Display for DailyToll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily Toll")?;
        writeln!(f, "  Date:          {}", self.date)?;
        writeln!(f, "  Vehicle:       {}", self.vehicle)?;
        writeln!(f, "  Passages:      {}", self.passages)?;
        writeln!(f, "  Toll-free day: {}", self.toll_free_date)?;
        if self.is_capped() {
            writeln!(
                f,
                "  Fee:           {} (capped from {})",
                self.fee, self.uncapped_fee
            )?;
        } else {
            writeln!(f, "  Fee:           {}", self.fee)?;
        }
        Ok(())
    }
}
