use crate::{Error, Result};
use nom::{
    character::complete::{digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt},
    sequence::{delimited, preceded, tuple},
    IResult,
};

/// A roll of `count` dice with `faces` faces each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSpec {
    faces: u32,
    count: u32,
}

impl DiceSpec {
    pub fn new(faces: u32, count: u32) -> Result<Self> {
        if faces < 1 {
            return Err(Error::invalid("faces", "a die needs at least 1 face"));
        }
        if count < 1 {
            return Err(Error::invalid("count", "at least 1 die must be rolled"));
        }
        if faces.checked_mul(count).is_none() {
            return Err(Error::invalid(
                "count",
                format!("the highest sum of {count}d{faces} does not fit in 32 bits"),
            ));
        }
        Ok(Self { faces, count })
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    // every die showing 1
    pub fn min_sum(&self) -> u32 {
        self.count
    }

    // every die showing its highest face
    pub fn max_sum(&self) -> u32 {
        self.faces * self.count
    }

    /// The number of distinct sums, i.e. the length of an outcome table
    pub fn sums(&self) -> usize {
        (self.max_sum() - self.min_sum() + 1) as usize
    }

    /// The number of equally likely ordered outcomes, faces^count
    ///
    /// Callers should check this before enumerating, the exact enumeration visits every one of
    /// them.
    pub fn outcomes(&self) -> Result<u64> {
        u64::from(self.faces)
            .checked_pow(self.count)
            .ok_or(Error::TooManyOutcomes {
                faces: self.faces,
                count: self.count,
            })
    }
}

impl std::str::FromStr for DiceSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (count, faces)) = notation(s).map_err(|_| {
            Error::invalid(
                "dice",
                format!("expected dice notation such as 3d6, got {s:?}"),
            )
        })?;
        DiceSpec::new(faces, count.unwrap_or(1))
    }
}

fn number(i: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(i)
}

// <count>d<faces>, the count may be omitted (d20)
fn notation(i: &str) -> IResult<&str, (Option<u32>, u32)> {
    all_consuming(delimited(
        multispace0,
        tuple((opt(number), preceded(one_of("dD"), number))),
        multispace0,
    ))(i)
}
