/// Mixed-radix counter over `len` digits in `base`
///
/// Starts at all zeros and counts up like a car odometer: the last digit moves fastest, and a
/// digit that reaches `base - 1` rolls back to 0 and carries into the digit before it. Every
/// combination of digits is visited exactly once, `base^len` in total.
///
/// Use [`Odometer::digits`] and [`Odometer::advance`] to walk the combinations without
/// allocating, or the `Iterator` impl to get each combination as an owned `Vec`.
#[derive(Debug, Clone)]
pub struct Odometer {
    base: u32,
    digits: Vec<u32>,
    digit_sum: u64,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

impl Odometer {
    /// A base below 1 counts as 1, every digit then stays at 0
    pub fn new(base: u32, len: usize) -> Self {
        Self {
            base: base.max(1),
            digits: vec![0; len],
            digit_sum: 0,
            state: State::Fresh,
        }
    }

    /// The current combination
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// Sum of the current digits, kept up to date by [`Odometer::advance`]
    pub fn digit_sum(&self) -> u64 {
        self.digit_sum
    }

    /// Moves to the next combination, returning false once every combination has been visited
    /// (the digits are then left at their last combination)
    pub fn advance(&mut self) -> bool {
        let max = self.base - 1;

        // find the right-most digit that can still be incremented
        let Some(pos) = self.digits.iter().rposition(|&d| d < max) else {
            self.state = State::Exhausted;
            return false;
        };

        self.digits[pos] += 1;
        self.digit_sum += 1;
        for digit in &mut self.digits[pos + 1..] {
            self.digit_sum -= u64::from(*digit);
            *digit = 0;
        }
        self.state = State::Running;
        true
    }
}

impl Iterator for Odometer {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        match self.state {
            State::Fresh => {
                self.state = State::Running;
                Some(self.digits.clone())
            }
            State::Running => self.advance().then(|| self.digits.clone()),
            State::Exhausted => None,
        }
    }
}
