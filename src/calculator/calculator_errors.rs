use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorErrors {
    InvalidSpeed(f64),
    InvalidDistance(f64),
}

impl fmt::Display for CalculatorErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorErrors::InvalidSpeed(speed) => {
                write!(f, "Speed must be positive and finite, got {} km/h", speed)
            }
            CalculatorErrors::InvalidDistance(distance) => {
                write!(f, "Distance must be non-negative and finite, got {} km", distance)
            }
        }
    }
}

impl Error for CalculatorErrors {}
