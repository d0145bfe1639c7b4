mod dice;
mod display;
mod enumerate;
mod grades;
mod odometer;
mod rng;
mod select;
mod sort;
mod table;

pub use dice::DiceSpec;
pub use enumerate::{enumerate_exact, estimate, NoProgress, Progress};
pub use grades::{total_credits, weighted_average};
pub use odometer::Odometer;
pub use rng::{Rng, Seed};
pub use select::{select, Selection};
pub use sort::{sort, Order, RankedList, SortBy};
pub use table::{expected_value, range_probability, OutcomeTable};

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller supplied value is outside of its allowed range
    InvalidParameter { name: &'static str, reason: String },
    /// faces^count does not fit in the outcome counter
    TooManyOutcomes { faces: u32, count: u32 },
    MismatchedLengths { grades: usize, credits: usize },
    NoCredits,
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter `{name}`: {reason}")
            }
            Error::TooManyOutcomes { faces, count } => {
                write!(f, "Too many outcomes to enumerate: {faces}^{count}")
            }
            Error::MismatchedLengths { grades, credits } => {
                write!(
                    f,
                    "Grades and credits do not agree in length: {grades} vs {credits}"
                )
            }
            Error::NoCredits => {
                write!(f, "No numeric credits to weight the grades with")
            }
        }
    }
}

impl std::error::Error for Error {}
