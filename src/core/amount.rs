use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest amount a money field accepts. Anything above reads as zero,
/// which keeps every ledger sum well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Text entered into a money field, kept verbatim for display.
///
/// Parsing is lenient: blank, malformed, negative or absurdly large text
/// (above [`MAX_AMOUNT`]) counts as zero so a half-typed form can always be
/// settled.
///
/// # Examples
///
/// ```
/// use fare_settlement::core::amount::AmountInput;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(AmountInput::new("20").value(), dec!(20));
/// assert_eq!(AmountInput::new("2x").value(), dec!(0));
/// assert!(AmountInput::new("2x").is_entered());
/// assert!(!AmountInput::empty().is_entered());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmountInput(String);

impl AmountInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether anything has been typed into the field.
    pub fn is_entered(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// The parsed amount, or zero when the text is not a non-negative number.
    pub fn value(&self) -> Decimal {
        parse_amount(&self.0).unwrap_or(Decimal::ZERO)
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Decimal> for AmountInput {
    fn from(d: Decimal) -> Self {
        Self::new(d.to_string())
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    // Digit separators are valid Rust literals but not valid user input.
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    (value >= Decimal::ZERO && value <= MAX_AMOUNT).then_some(value)
}

/// Text entered into the back-row passenger count field.
///
/// Same leniency as [`AmountInput`]: anything that is not a non-negative
/// whole number counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountInput(String);

impl CountInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_entered(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn value(&self) -> u32 {
        self.0.trim().parse::<u32>().unwrap_or(0)
    }
}

impl fmt::Display for CountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CountInput {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u32> for CountInput {
    fn from(n: u32) -> Self {
        Self::new(n.to_string())
    }
}
