use std::{cmp::Ordering, fmt, str::FromStr};

/// A non-negative integer of arbitrary size.
///
/// Numbers are stored as their canonical decimal digits, i.e. without leading zeros.
/// This keeps version components lossless for values that would overflow a `u64`.
///
/// ## Examples
///
/// ```rust
/// # use strict_version::Number;
/// let small = Number::from(9);
/// let large: Number = "98765432109876543210".parse().unwrap();
/// assert!(small < large);
/// assert_eq!(small.incremented().to_string(), "10");
/// assert_eq!(large.incremented().to_string(), "98765432109876543211");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: String,
}

impl Number {
    /// The number zero.
    pub fn zero() -> Self {
        Self {
            digits: String::from("0"),
        }
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// The canonical decimal digits of this number.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the value as a `u64`, or `None` if it does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Returns a new number that is one larger than this one.
    pub fn incremented(&self) -> Self {
        Self {
            digits: increment_digits(&self.digits),
        }
    }

    /// `digits` must already be validated to be canonical.
    pub(crate) fn from_digits(digits: &str) -> Self {
        Self {
            digits: String::from(digits),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl FromStr for Number {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidNumber::Empty);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(InvalidNumber::NotADigit(c));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(InvalidNumber::LeadingZero(String::from(s)));
        }
        Ok(Self::from_digits(s))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.digits)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.digits, &other.digits)
    }
}

/// Errors when creating a [`Number`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNumber {
    /// The input was empty.
    #[error("A number must have at least one digit")]
    Empty,
    /// The input contained something other than ascii digits.
    #[error("`{0}` is not a digit")]
    NotADigit(char),
    /// The input had more than one digit and started with a zero.
    #[error("The number `{0}` must not have leading zeros")]
    LeadingZero(String),
}

/// Compares two strings of ascii digits by their numeric value.
///
/// Leading zeros are not stripped, so `"01"` and `"1"` do not compare equal.
pub(crate) fn cmp_digits(lhs: &str, rhs: &str) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

/// Adds one to a non-empty string of ascii digits.
pub(crate) fn increment_digits(digits: &str) -> String {
    match digits.rfind(|c: char| c != '9') {
        Some(index) => {
            let (head, tail) = digits.split_at(index);
            let mut tail = tail.chars();
            let next = tail
                .next()
                .and_then(|d| d.to_digit(10))
                .and_then(|d| std::char::from_digit(d + 1, 10))
                .unwrap_or('1');
            let mut result = String::with_capacity(digits.len());
            result.push_str(head);
            result.push(next);
            result.extend(tail.map(|_| '0'));
            result
        }
        None => {
            let mut result = String::with_capacity(digits.len() + 1);
            result.push('1');
            result.extend(digits.chars().map(|_| '0'));
            result
        }
    }
}
