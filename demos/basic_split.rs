//! Basic fare split example.
//!
//! Walks through one calculation round: three seats in a middle row and
//! two passengers behind them paying through the same collector.

use fare_settlement::core::fare::{FareContext, RowPosition};
use fare_settlement::settlement::engine::Settlement;
use fare_settlement::settlement::instruction::HandoffInstruction;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  fare-settlement: Basic Split Example    ║");
    println!("╚══════════════════════════════════════════╝\n");

    let ctx = match FareContext::new(dec!(15), RowPosition::NotLast, 3) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("invalid context: {}", e);
            return;
        }
    };
    let mut settlement = Settlement::initialize(ctx);

    // --- Regular seats ---
    println!("━━━ Regular seats ━━━\n");

    settlement.select_seat(0);
    settlement.set_paid("20");
    settlement.set_taken("5");

    settlement.select_seat(1);
    settlement.set_paid("50");

    settlement.select_seat(2);
    settlement.set_paid("15");

    for i in 0..settlement.seats().len() {
        if let Some(remaining) = settlement.seat_remaining(i) {
            println!("  Seat {}: remaining {}", i + 1, remaining);
        }
    }
    println!();

    // --- Back row ---
    println!("━━━ Back row (2 passengers) ━━━\n");

    settlement.select_back_row();
    settlement.set_back_row_passenger_count("2");
    settlement.set_paid("40");

    if let Some(remaining) = settlement.back_row_remaining() {
        println!("  Back row: remaining {}", remaining);
    }
    println!();

    let snapshot = settlement.snapshot();
    println!("{}", snapshot);
    println!("{}", HandoffInstruction::from_aggregate(&snapshot.aggregate));
}
