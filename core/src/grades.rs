use crate::{Error, Result};

// grades and credits come in as text, only whole numbers count
fn whole_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Credit weighted mean of the grades
///
/// `grades[i]` is weighted by `credits[i]`. A pair is skipped when either side is not a whole
/// number (a letter grade such as "P", a blank). For 80 and 90 at 3 and 6 credits this is
/// 86.67.
pub fn weighted_average<G, C>(grades: &[G], credits: &[C]) -> Result<f64>
where
    G: AsRef<str>,
    C: AsRef<str>,
{
    if grades.len() != credits.len() {
        return Err(Error::MismatchedLengths {
            grades: grades.len(),
            credits: credits.len(),
        });
    }

    let mut weighted = 0.;
    let mut total = 0.;
    for (grade, credit) in grades.iter().zip(credits) {
        let grade = whole_number(grade.as_ref());
        let credit = whole_number(credit.as_ref());
        if let (Some(grade), Some(credit)) = (grade, credit) {
            weighted += grade * credit;
            total += credit;
        }
    }

    if total == 0. {
        return Err(Error::NoCredits);
    }
    Ok(weighted / total)
}

/// Sum of every credit that is a whole number
pub fn total_credits<C: AsRef<str>>(credits: &[C]) -> f64 {
    credits
        .iter()
        .filter_map(|credit| whole_number(credit.as_ref()))
        .sum()
}
