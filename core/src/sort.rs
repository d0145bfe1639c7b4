#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Value,
    Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn descending(descending: bool) -> Self {
        if descending {
            Order::Descending
        } else {
            Order::Ascending
        }
    }
}

/// (key, value) pairs in the order produced by [`sort`]
#[derive(Debug, Clone, PartialEq)]
pub struct RankedList<K, V>(Vec<(K, V)>);

impl<K, V> RankedList<K, V> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[(K, V)] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.0
    }

    /// Keeps the first `len` entries
    pub fn truncated(mut self, len: usize) -> Self {
        self.0.truncate(len);
        self
    }
}

impl<K, V> IntoIterator for RankedList<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a RankedList<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// pending work, popped from the back of the stack
enum Task<K, V> {
    Sort(Vec<(K, V)>),
    Emit(Vec<(K, V)>),
}

/// Sorts (key, value) pairs by value or by key using a three-way partition
///
/// The first entry is taken as the pivot and the rest are split into the entries greater than,
/// equal to, and less than it. The greater and lesser groups are sorted the same way and the
/// groups are joined back up in the requested order. Entries that compare equal stay in the
/// order they were given in.
///
/// Entries that compare neither greater nor equal to the pivot (such as a NaN value) go with
/// the lesser group.
///
/// The pivot is never randomized so an already sorted input is the worst case. Partitions are
/// kept on an explicit stack rather than recursed into, so that case is slow but never
/// overflows.
pub fn sort<K, V>(
    entries: impl IntoIterator<Item = (K, V)>,
    by: SortBy,
    order: Order,
) -> RankedList<K, V>
where
    K: PartialOrd,
    V: PartialOrd,
{
    let entries: Vec<_> = entries.into_iter().collect();
    let mut sorted = Vec::with_capacity(entries.len());

    let mut stack = vec![Task::Sort(entries)];
    while let Some(task) = stack.pop() {
        let entries = match task {
            Task::Emit(entries) => {
                sorted.extend(entries);
                continue;
            }
            Task::Sort(entries) if entries.len() <= 1 => {
                sorted.extend(entries);
                continue;
            }
            Task::Sort(entries) => entries,
        };

        let mut iter = entries.into_iter();
        let Some(pivot) = iter.next() else {
            continue;
        };

        let mut greater = vec![];
        let mut equal = vec![];
        let mut less = vec![];
        for entry in iter {
            let ordering = match by {
                SortBy::Value => compare(&entry.1, &pivot.1),
                SortBy::Key => compare(&entry.0, &pivot.0),
            };
            match ordering {
                Partition::Greater => greater.push(entry),
                Partition::Equal => equal.push(entry),
                Partition::Less => less.push(entry),
            }
        }
        let equal = std::iter::once(pivot).chain(equal).collect();

        // pushed in reverse, the first group to emit goes on top
        let (first, last) = match order {
            Order::Ascending => (less, greater),
            Order::Descending => (greater, less),
        };
        stack.push(Task::Sort(last));
        stack.push(Task::Emit(equal));
        stack.push(Task::Sort(first));
    }

    RankedList(sorted)
}

enum Partition {
    Greater,
    Equal,
    Less,
}

fn compare<T: PartialOrd>(entry: &T, pivot: &T) -> Partition {
    if entry > pivot {
        Partition::Greater
    } else if entry == pivot {
        Partition::Equal
    } else {
        Partition::Less
    }
}
