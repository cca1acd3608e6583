/// Binary search over an ascending, duplicate-free slice.
///
/// Returns `Ok(index)` when `key` is present and `Err(insert_at)` otherwise,
/// where `insert_at` keeps the slice sorted. Works on the half-open range
/// `[lo, hi)` with an integer midpoint, so every iteration shrinks the range
/// and the loop terminates for any length.
pub fn locate<T: Ord>(items: &[T], key: &T) -> Result<usize, usize> {
    let mut lo = 0usize;
    let mut hi = items.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match items[mid].cmp(key) {
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
            std::cmp::Ordering::Equal => return Ok(mid),
        }
    }

    Err(lo)
}

/// An ascending, duplicate-free list of ids.
///
/// Backs the node order, the edge order and every adjacency list.
/// Insertion is O(log n) search + O(n) shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedIds<T> {
    items: Vec<T>,
}

impl<T: Ord + Copy> SortedIds<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Insert at the sorted position. Returns false if already present.
    pub fn insert(&mut self, id: T) -> bool {
        match locate(&self.items, &id) {
            Ok(_) => false,
            Err(at) => {
                self.items.insert(at, id);
                true
            }
        }
    }

    /// Returns false if `id` was not present.
    pub fn remove(&mut self, id: &T) -> bool {
        match locate(&self.items, id) {
            Ok(at) => {
                self.items.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        locate(&self.items, id).is_ok()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord + Copy> Default for SortedIds<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a SortedIds<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
