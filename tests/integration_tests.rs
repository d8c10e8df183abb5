use fare_settlement::core::fare::{ContextError, FareContext, RowPosition};
use fare_settlement::core::selection::Selection;
use fare_settlement::settlement::engine::Settlement;
use fare_settlement::settlement::instruction::HandoffInstruction;
use fare_settlement::settlement::script::{Edit, SessionScript};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Full round: four seats plus a back row of two, everyone pays, change goes back.
#[test]
fn full_round_with_back_row() {
    let ctx = FareContext::new(dec!(12), RowPosition::NotLast, 4).unwrap();
    let mut s = Settlement::initialize(ctx);

    // Seat 1 pays exact, seat 2 overpays, seat 3 pays a large note and takes change,
    // seat 4 has not paid yet.
    s.select_seat(0);
    s.set_paid("12");
    s.select_seat(1);
    s.set_paid("20");
    s.select_seat(2);
    s.set_paid("50");
    s.set_taken("38");

    s.select_back_row();
    s.set_back_row_passenger_count("2");
    s.set_paid("30");

    assert_eq!(s.seat_remaining(0), Some(Decimal::ZERO));
    assert_eq!(s.seat_remaining(1), Some(dec!(8)));
    assert_eq!(s.seat_remaining(2), Some(Decimal::ZERO));
    assert_eq!(s.seat_remaining(3), Some(Decimal::ZERO));
    assert_eq!(s.back_row_remaining(), Some(dec!(6)));

    let agg = s.aggregate();
    assert_eq!(agg.total_balance, dec!(74));
    assert_eq!(agg.total_passengers, 6);
    assert_eq!(agg.total_remaining, dec!(14));

    let instruction = HandoffInstruction::from_aggregate(&agg);
    assert_eq!(instruction.give, dec!(74));
    assert_eq!(instruction.passengers, 6);
    assert_eq!(instruction.take_back, dec!(14));
}

/// Two seats (10, 0) and (0, 0) at fare 10: cash is 10 but nothing remains.
#[test]
fn balance_and_remaining_diverge() {
    let ctx = FareContext::new(dec!(10), RowPosition::Last, 2).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(0);
    s.set_paid("10");
    s.set_taken("0");
    s.select_seat(1);
    s.set_paid("0");
    s.set_taken("0");

    let agg = s.aggregate();
    assert_eq!(agg.total_balance, dec!(10));
    // Seat 2 paid "0", so no fare is charged to it.
    assert_eq!(agg.total_remaining, Decimal::ZERO);
    assert_eq!(s.seat_remaining(1), Some(Decimal::ZERO));
    assert!(!s.snapshot().seats[1].fare_charged);
}

/// Amounts too large to settle read as zero instead of overflowing the totals.
#[test]
fn oversized_amounts_do_not_overflow() {
    let ctx = FareContext::new(dec!(10), RowPosition::NotLast, 2).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(0);
    s.set_paid("5");
    s.set_taken("79228162514264337593543950335");
    assert_eq!(s.seat_remaining(0), Some(dec!(-5)));

    s.select_seat(1);
    s.set_paid("79228162514264337593543950335");
    s.select_back_row();
    s.set_back_row_passenger_count("4294967295");

    let agg = s.aggregate();
    assert_eq!(agg.total_balance, dec!(5));
    assert_eq!(agg.total_passengers, 2 + 4_294_967_295u64);
    assert_eq!(agg.total_remaining, dec!(-5) - dec!(42949672950));
}

#[test]
fn selection_is_exclusive() {
    let ctx = FareContext::new(dec!(10), RowPosition::NotLast, 3).unwrap();
    let mut s = Settlement::initialize(ctx);

    s.select_seat(1);
    s.select_seat(1);
    assert_eq!(s.selection(), Selection::None);

    s.select_seat(0);
    s.select_seat(2);
    assert_eq!(s.selection(), Selection::RegularSeat(2));

    s.select_back_row();
    assert_eq!(s.selection(), Selection::BackRow);

    s.select_seat(0);
    assert_eq!(s.selection(), Selection::RegularSeat(0));
}

#[test]
fn reinitialize_after_edits() {
    let ctx = FareContext::new(dec!(8), RowPosition::NotLast, 2).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(0);
    s.set_paid("100");
    s.select_back_row();
    s.set_back_row_passenger_count("5");
    s.set_taken("3");

    let fresh = Settlement::initialize(ctx);
    assert_eq!(fresh.selection(), Selection::None);
    assert!(fresh.seats().iter().all(|seat| seat.is_empty()));
    assert!(fresh.back_row().map_or(false, |b| b.is_empty()));

    s.reset();
    assert_eq!(s, fresh);
}

#[test]
fn rejects_out_of_range_context() {
    assert!(matches!(
        FareContext::new(dec!(10), RowPosition::Last, 0),
        Err(ContextError::SeatCountOutOfRange { .. })
    ));
    assert!(matches!(
        FareContext::new(dec!(10), RowPosition::Last, 6),
        Err(ContextError::SeatCountOutOfRange { .. })
    ));
    assert!(matches!(
        FareContext::new(dec!(0), RowPosition::Last, 3),
        Err(ContextError::FareOutOfRange { .. })
    ));
    assert!(matches!(
        FareContext::new(dec!(1000.5), RowPosition::Last, 3),
        Err(ContextError::FareOutOfRange { .. })
    ));
}

#[test]
fn malformed_input_degrades_to_zero() {
    let ctx = FareContext::new(dec!(10), RowPosition::NotLast, 1).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(0);
    s.set_paid("twenty");
    s.set_taken("");
    // The amount reads as zero, so no fare is charged.
    assert_eq!(s.seat_remaining(0), Some(Decimal::ZERO));
    assert_eq!(s.seats()[0].paid.as_str(), "twenty");

    s.select_back_row();
    s.set_back_row_passenger_count("two");
    s.set_paid("15");
    assert_eq!(s.back_row_remaining(), Some(dec!(15)));
    assert_eq!(s.aggregate().total_passengers, 1);
}

/// Scripts load from the same JSON the CLI reads.
#[test]
fn script_from_json() {
    let json = r#"{
        "fare": "10",
        "row": "not-last",
        "seats": 2,
        "edits": [
            { "op": "select_back_row" },
            { "op": "set_back_row_passenger_count", "value": "2" },
            { "op": "set_paid", "value": "25" },
            { "op": "set_taken", "value": "0" },
            { "op": "select_seat", "index": 0 },
            { "op": "set_paid", "value": "20" },
            { "op": "set_taken", "value": "5" }
        ]
    }"#;
    let script: SessionScript = serde_json::from_str(json).unwrap();
    assert_eq!(script.edits.len(), 7);
    assert_eq!(script.edits[0], Edit::SelectBackRow);

    let s = script.run().unwrap();
    assert_eq!(s.back_row_remaining(), Some(dec!(5)));
    assert_eq!(s.seat_remaining(0), Some(dec!(5)));
}

#[test]
fn script_defaults_to_not_last_row() {
    let script: SessionScript = serde_json::from_str(r#"{ "fare": "5", "seats": 1 }"#).unwrap();
    assert_eq!(script.row, RowPosition::NotLast);
    assert!(script.edits.is_empty());
    assert!(script.run().unwrap().back_row().is_some());
}

/// Snapshot serializes with decimals as strings and keeps entered text.
#[test]
fn snapshot_serializes() {
    let ctx = FareContext::new(dec!(10), RowPosition::NotLast, 2).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(0);
    s.set_paid("20");
    s.set_taken("5");

    let json = serde_json::to_string_pretty(&s.snapshot()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["seats"][0]["paid"], "20");
    assert_eq!(parsed["seats"][0]["remaining"], "5");
    assert_eq!(parsed["seats"][1]["paid"], "");
    assert_eq!(parsed["aggregate"]["total_balance"], "15");
    assert_eq!(parsed["aggregate"]["total_passengers"], 2);
    assert_eq!(parsed["context"]["row_position"], "not-last");
    assert!(parsed.get("back_row").is_some());
}

#[test]
fn snapshot_text_rendering() {
    let ctx = FareContext::new(dec!(10), RowPosition::Last, 2).unwrap();
    let mut s = Settlement::initialize(ctx);
    s.select_seat(1);
    s.set_paid("10");

    let text = s.snapshot().to_string();
    assert!(text.contains("=== Settlement ==="));
    assert!(text.contains("#2"));
    assert!(!text.contains("back x"));
    assert!(text.contains("Selected:       seat 2"));
}
