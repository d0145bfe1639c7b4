use crate::{sort, Error, Order, OutcomeTable, RankedList, Result, SortBy};

/// How an outcome table is ranked for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Only keep this many of the most (or with `ascending`, least) likely sums
    pub limit: Option<usize>,
    /// Lowest first instead of highest first
    pub ascending: bool,
    /// Order by sum instead of by probability
    pub by_sum: bool,
}

/// Ranks the sums of a table, most likely first by default
///
/// With a limit the table is first ranked by probability and cut down to `limit` entries,
/// only then are the remaining entries put in order of sum if `by_sum` is set. The limit
/// always picks the most (or least) likely sums, never the highest or lowest ones.
pub fn select(table: &OutcomeTable, selection: Selection) -> Result<RankedList<u32, f64>> {
    let order = Order::descending(!selection.ascending);
    let by = if selection.by_sum {
        SortBy::Key
    } else {
        SortBy::Value
    };

    match selection.limit {
        Some(0) => Err(Error::invalid("limit", "at least 1 entry must be kept")),
        Some(limit) => {
            let ranked = sort(table.iter(), SortBy::Value, order).truncated(limit);
            Ok(sort(ranked, by, order))
        }
        None => Ok(sort(table.iter(), by, order)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn table() -> OutcomeTable {
        OutcomeTable::from_percentages(1, vec![10., 50., 5., 35.])
    }

    fn selection(limit: Option<usize>, ascending: bool, by_sum: bool) -> Selection {
        Selection {
            limit,
            ascending,
            by_sum,
        }
    }

    #[test]
    fn limit_picks_by_probability_before_reordering() {
        let top_two = select(&table(), selection(Some(2), false, false)).unwrap();
        pretty_assertions::assert_eq!(top_two.as_slice(), &[(2, 50.), (4, 35.)]);

        let by_sum = sort(top_two, SortBy::Key, Order::Ascending);
        pretty_assertions::assert_eq!(by_sum.into_vec(), vec![(2, 50.), (4, 35.)]);
    }

    #[test_case(None, false, false => vec![(2, 50.), (4, 35.), (1, 10.), (3, 5.)]; "all by probability")]
    #[test_case(None, true, false => vec![(3, 5.), (1, 10.), (4, 35.), (2, 50.)]; "all by probability ascending")]
    #[test_case(None, false, true => vec![(4, 35.), (3, 5.), (2, 50.), (1, 10.)]; "all by sum")]
    #[test_case(None, true, true => vec![(1, 10.), (2, 50.), (3, 5.), (4, 35.)]; "all by sum ascending")]
    #[test_case(Some(2), false, true => vec![(4, 35.), (2, 50.)]; "top two by sum")]
    #[test_case(Some(2), true, false => vec![(3, 5.), (1, 10.)]; "bottom two")]
    #[test_case(Some(2), true, true => vec![(1, 10.), (3, 5.)]; "bottom two by sum")]
    #[test_case(Some(9), false, false => vec![(2, 50.), (4, 35.), (1, 10.), (3, 5.)]; "limit past the end")]
    fn ranks(limit: Option<usize>, ascending: bool, by_sum: bool) -> Vec<(u32, f64)> {
        select(&table(), selection(limit, ascending, by_sum))
            .unwrap()
            .into_vec()
    }

    #[test]
    fn limited_by_sum_never_reaches_for_low_sums() {
        let ranked = select(&table(), selection(Some(2), true, true)).unwrap();
        assert!(ranked.iter().all(|&(sum, _)| sum != 2 && sum != 4));

        let ranked = select(&table(), selection(Some(2), false, true)).unwrap();
        assert!(ranked.iter().all(|&(sum, _)| sum != 3));
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(matches!(
            select(&table(), selection(Some(0), false, false)),
            Err(Error::InvalidParameter { name: "limit", .. })
        ));
    }
}
