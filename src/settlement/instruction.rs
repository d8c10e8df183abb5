use crate::settlement::aggregate::Aggregate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the collecting passenger passes forward once nobody in the row is
/// waiting on change.
///
/// The collector passes on all cash held for the counted passengers and
/// takes back whatever remainder the row is still owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffInstruction {
    pub give: Decimal,
    pub passengers: u64,
    pub take_back: Decimal,
}

impl HandoffInstruction {
    pub fn from_aggregate(aggregate: &Aggregate) -> Self {
        Self {
            give: aggregate.total_balance,
            passengers: aggregate.total_passengers,
            take_back: aggregate.total_remaining,
        }
    }
}

impl std::fmt::Display for HandoffInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instructions (if no change is left to hand out)")?;
        write!(
            f,
            "Give the person in front of you {} for {} passengers and take back {}",
            self.give, self.passengers, self.take_back
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_aggregate() {
        let agg = Aggregate {
            total_balance: dec!(50),
            total_passengers: 4,
            total_remaining: dec!(10),
        };
        let instruction = HandoffInstruction::from_aggregate(&agg);
        assert_eq!(instruction.give, dec!(50));
        assert_eq!(instruction.passengers, 4);
        assert_eq!(instruction.take_back, dec!(10));
    }

    #[test]
    fn test_display_sentence() {
        let instruction = HandoffInstruction {
            give: dec!(40),
            passengers: 4,
            take_back: dec!(0),
        };
        let text = instruction.to_string();
        assert!(text.ends_with(
            "Give the person in front of you 40 for 4 passengers and take back 0"
        ));
    }
}
