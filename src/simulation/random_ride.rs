//! Random ride generation.
//!
//! Produces session scripts with a valid context and a noisy edit stream:
//! blank and malformed amounts, seats past the end of the row and back-row
//! edits on last rows all show up, so the lenient paths get exercised.

use crate::core::fare::{RowPosition, MAX_SEATS, MIN_SEATS};
use crate::settlement::script::{Edit, SessionScript};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating random rides.
#[derive(Debug, Clone)]
pub struct RideConfig {
    /// Fewest regular seats in a generated row.
    pub min_seats: usize,
    /// Most regular seats in a generated row.
    pub max_seats: usize,
    /// Lowest fare, in whole currency units.
    pub min_fare: u32,
    /// Highest fare, in whole currency units.
    pub max_fare: u32,
    /// Chance that the tracked row has a back row behind it.
    pub back_row_probability: f64,
    /// Number of edits per ride.
    pub edits_per_ride: usize,
    /// Chance that an amount edit is blank or malformed text.
    pub noise_probability: f64,
}

impl Default for RideConfig {
    fn default() -> Self {
        Self {
            min_seats: MIN_SEATS,
            max_seats: MAX_SEATS,
            min_fare: 1,
            max_fare: 50,
            back_row_probability: 0.5,
            edits_per_ride: 20,
            noise_probability: 0.1,
        }
    }
}

/// Generate one random ride.
pub fn generate_ride(config: &RideConfig) -> SessionScript {
    let mut rng = rand::thread_rng();

    let seats = rng.gen_range(config.min_seats..=config.max_seats.max(config.min_seats));
    let fare = Decimal::from(rng.gen_range(config.min_fare..=config.max_fare.max(config.min_fare)));
    let row = if rng.gen_bool(config.back_row_probability.clamp(0.0, 1.0)) {
        RowPosition::NotLast
    } else {
        RowPosition::Last
    };

    let edits = (0..config.edits_per_ride)
        .map(|_| random_edit(&mut rng, config, seats, fare))
        .collect();

    SessionScript {
        fare,
        row,
        seats,
        edits,
    }
}

/// Generate `count` random rides.
pub fn generate_rides(config: &RideConfig, count: usize) -> Vec<SessionScript> {
    (0..count).map(|_| generate_ride(config)).collect()
}

fn random_edit<R: Rng>(rng: &mut R, config: &RideConfig, seats: usize, fare: Decimal) -> Edit {
    match rng.gen_range(0..10) {
        // One index past the end on purpose.
        0..=2 => Edit::SelectSeat {
            index: rng.gen_range(0..=seats),
        },
        3 => Edit::SelectBackRow,
        4..=5 => Edit::SetPaid {
            value: random_amount(rng, config, fare),
        },
        6..=7 => Edit::SetTaken {
            value: random_amount(rng, config, fare),
        },
        _ => Edit::SetBackRowPassengerCount {
            value: rng.gen_range(0..=6u32).to_string(),
        },
    }
}

fn random_amount<R: Rng>(rng: &mut R, config: &RideConfig, fare: Decimal) -> String {
    if rng.gen_bool(config.noise_probability.clamp(0.0, 1.0)) {
        return match rng.gen_range(0..3) {
            0 => String::new(),
            1 => "abc".to_string(),
            _ => "-5".to_string(),
        };
    }
    // Mostly whole notes around a few fares' worth.
    let multiple = Decimal::from(rng.gen_range(0..=4u32));
    let cents = Decimal::new(rng.gen_range(0..100i64), 2);
    (fare * multiple + cents).round_dp(2).to_string()
}
