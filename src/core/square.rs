use crate::core::{value_or_prompt, Console, Drill};
use crate::utils::error::{DrillError, Result};
use std::fmt;

pub trait CheckedSquare: Copy + fmt::Display {
    fn checked_square(self) -> Option<Self>;
}

macro_rules! impl_checked_square_int {
    ($($t:ty),*) => {
        $(impl CheckedSquare for $t {
            fn checked_square(self) -> Option<Self> {
                self.checked_mul(self)
            }
        })*
    };
}

impl_checked_square_int!(i32, i64, u32, u64);

impl CheckedSquare for f64 {
    fn checked_square(self) -> Option<Self> {
        let result = self * self;
        result.is_finite().then_some(result)
    }
}

pub fn square<T: CheckedSquare>(value: T) -> Result<T> {
    value.checked_square().ok_or_else(|| DrillError::Overflow {
        operation: "square".to_string(),
        input: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Squares untyped text input; anything that is not a finite number is a type mismatch.
pub fn square_input(raw: &str) -> Result<(Number, Number)> {
    let trimmed = raw.trim();
    let mismatch = || DrillError::TypeMismatch {
        operation: "square".to_string(),
        input: trimmed.to_string(),
    };

    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok((Number::Integer(n), Number::Integer(square(n)?)));
    }
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok((Number::Float(x), Number::Float(square(x)?))),
        _ => Err(mismatch()),
    }
}

pub struct SquareDrill {
    pub value: Option<String>,
}

impl Drill for SquareDrill {
    fn name(&self) -> &'static str {
        "square"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let raw = value_or_prompt(console, self.value.as_deref(), "Enter a number to square: ")?;
        match square_input(&raw) {
            Ok((input, squared)) => console.say(&format!("{} squared is {}", input, squared)),
            Err(e) => console.say(&format!("Error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert_eq!(square(3).unwrap(), 9);
        assert_eq!(square(5).unwrap(), 25);
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(square(-4).unwrap(), 16);
        assert_eq!(square(-4i64).unwrap(), 16);
    }

    #[test]
    fn test_float_input() {
        assert_eq!(square(1.5f64).unwrap(), 2.25);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(square(i32::MAX), Err(DrillError::Overflow { .. })));
        assert!(matches!(square(f64::MAX), Err(DrillError::Overflow { .. })));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(square_input("hello"), Err(DrillError::TypeMismatch { .. })));
        assert!(matches!(square_input(""), Err(DrillError::TypeMismatch { .. })));
        assert!(matches!(square_input("NaN"), Err(DrillError::TypeMismatch { .. })));
    }

    #[test]
    fn test_square_input_keeps_number_kind() {
        assert_eq!(
            square_input(" -4 ").unwrap(),
            (Number::Integer(-4), Number::Integer(16))
        );
        assert_eq!(
            square_input("2.5").unwrap(),
            (Number::Float(2.5), Number::Float(6.25))
        );
    }
}
