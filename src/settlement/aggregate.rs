use crate::settlement::engine::Settlement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals across every ledger of a settlement.
///
/// `total_balance` is the cash the collector physically holds (paid minus
/// taken, fare ignored), while `total_remaining` sums each ledger's
/// fare-adjusted remainder. The two differ by the fare charged so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total_balance: Decimal,
    pub total_passengers: u64,
    pub total_remaining: Decimal,
}

impl Aggregate {
    /// Sum the ledgers of a settlement.
    ///
    /// # Algorithm
    ///
    /// 1. Cash balance = Σ (paid - taken) over seats and the back row.
    /// 2. Passengers = regular seats + back-row head count.
    /// 3. Remaining = Σ fare-adjusted remainders over seats and the back row.
    pub fn compute(settlement: &Settlement) -> Self {
        let fare = settlement.context().fare_per_passenger();

        let mut total_balance: Decimal = settlement.seats().iter().map(|s| s.cash_balance()).sum();
        let mut total_remaining: Decimal = settlement
            .seats()
            .iter()
            .map(|s| s.remaining(fare))
            .sum();
        let mut total_passengers = settlement.seats().len() as u64;

        if let Some(back) = settlement.back_row() {
            total_balance += back.cash_balance();
            total_remaining += back.remaining(fare);
            total_passengers += u64::from(back.passengers());
        }

        Aggregate {
            total_balance,
            total_passengers,
            total_remaining,
        }
    }

    /// Fare charged so far across all ledgers.
    pub fn fare_charged(&self) -> Decimal {
        self.total_balance - self.total_remaining
    }
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Totals ===")?;
        writeln!(f, "Cash Balance:   {}", self.total_balance)?;
        writeln!(f, "Passengers:     {}", self.total_passengers)?;
        writeln!(f, "Remaining:      {}", self.total_remaining)?;
        writeln!(f, "Fare Charged:   {}", self.fare_charged())?;
        Ok(())
    }
}
