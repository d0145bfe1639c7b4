use crate::{DiceSpec, Error, Odometer, OutcomeTable, Result, Rng};

/// Observer for long running computations
///
/// `report` is called once per visited outcome (or per simulated roll) with the number completed
/// so far and the number expected in total.
pub trait Progress {
    fn report(&mut self, completed: u64, total: u64);
}

impl<F> Progress for F
where
    F: FnMut(u64, u64),
{
    fn report(&mut self, completed: u64, total: u64) {
        self(completed, total)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _completed: u64, _total: u64) {}
}

/// Exact probability of every sum, found by visiting all faces^count ordered outcomes
///
/// Each outcome is a combination of an odometer counting in base `faces` with one digit per
/// die, digit `k` standing for face `k + 1`. The outcomes are tallied per sum and every tally
/// is turned into a percentage of the total.
///
/// The work grows as faces^count, check [`DiceSpec::outcomes`] before calling this with big
/// dice.
pub fn enumerate_exact(dice: DiceSpec, progress: &mut impl Progress) -> Result<OutcomeTable> {
    let total = dice.outcomes()?;
    log::debug!("enumerating {total} outcomes of {dice}");

    let min_sum = dice.min_sum();
    if dice.faces() == 1 {
        // a single outcome, no need for one digit per die
        progress.report(1, 1);
        return Ok(OutcomeTable::from_counts(min_sum, &[1], 1));
    }
    let mut counts = vec![0u64; dice.sums()];

    let mut odometer = Odometer::new(dice.faces(), dice.count() as usize);
    let mut visited = 0;
    loop {
        // digit k is face k + 1, so the digit sum is the sum's offset from min_sum
        counts[odometer.digit_sum() as usize] += 1;

        visited += 1;
        progress.report(visited, total);

        if !odometer.advance() {
            break;
        }
    }
    debug_assert_eq!(visited, total);

    log::debug!("finished enumerating {dice}");
    Ok(OutcomeTable::from_counts(min_sum, &counts, total))
}

/// Estimated probability of every sum, from `trials` simulated rolls
///
/// Sums that never came up are still in the table, at 0%. How many trials are enough is up to
/// the caller, no confidence interval is computed.
pub fn estimate(
    dice: DiceSpec,
    trials: u64,
    rng: &mut Rng,
    progress: &mut impl Progress,
) -> Result<OutcomeTable> {
    if trials < 1 {
        return Err(Error::invalid("trials", "at least 1 trial must be run"));
    }
    log::debug!(
        "estimating {dice} from {trials} trials (seed {})",
        rng.initial_seed
    );

    let min_sum = dice.min_sum();
    let mut counts = vec![0u64; dice.sums()];

    for trial in 1..=trials {
        let sum: u32 = (0..dice.count()).map(|_| rng.roll(dice.faces())).sum();
        counts[(sum - min_sum) as usize] += 1;
        progress.report(trial, trials);
    }

    log::debug!("finished estimating {dice}");
    Ok(OutcomeTable::from_counts(min_sum, &counts, trials))
}
