use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Orders two items the way `slice::sort_by` does: `Ordering::Less` means
/// the first item ranks ahead of the second.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

// Heap entry. The heap is a max-heap, so entries compare "greater" when they
// rank worse; the top of the heap is always the next item to evict.
struct Entry<T> {
    item: T,
    seq: u64,
    cmp: Comparator<T>,
}

impl<T> Entry<T> {
    fn rank(&self, other: &Self) -> Ordering {
        // later insertions lose ties
        (self.cmp)(&self.item, &other.item).then(self.seq.cmp(&other.seq))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.rank(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank(other)
    }
}

/// Fixed-capacity ranked collection.
///
/// Holds at most `capacity` items. Once full, a new item replaces the
/// worst-ranked held item only if it ranks strictly better; items that
/// compare equal keep their insertion order, so the earlier one is retained.
pub struct BoundedTopK<T> {
    heap: BinaryHeap<Entry<T>>,
    capacity: usize,
    cmp: Comparator<T>,
    next_seq: u64,
}

impl<T> BoundedTopK<T> {
    pub fn new(capacity: usize, cmp: Comparator<T>) -> Self {
        BoundedTopK {
            heap: BinaryHeap::with_capacity(capacity.min(1024)),
            capacity: capacity,
            cmp: cmp,
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers `item`; returns true if it was kept.
    pub fn insert(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let entry = Entry {
            item: item,
            seq: self.next_seq,
            cmp: self.cmp,
        };
        self.next_seq += 1;
        if self.heap.len() < self.capacity {
            self.heap.push(entry);
            return true;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            if entry < *worst {
                *worst = entry;
                return true;
            }
        }
        false
    }

    /// Consumes the container, returning the held items best-first.
    pub fn extract_ordered(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.item)
            .collect()
    }
}

impl<T> Extend<T> for BoundedTopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_score_desc(a: &(u32, f64), b: &(u32, f64)) -> Ordering {
        b.1.total_cmp(&a.1)
    }

    #[test]
    fn test_keeps_best_k() {
        let mut topk = BoundedTopK::new(3, by_score_desc);
        topk.extend(vec![(1, 0.2), (2, 0.9), (3, 0.5), (4, 0.1), (5, 0.7)]);
        assert_eq!(topk.len(), 3);
        let items = topk.extract_ordered();
        assert_eq!(items, vec![(2, 0.9), (5, 0.7), (3, 0.5)]);
    }

    #[test]
    fn test_below_capacity() {
        let mut topk = BoundedTopK::new(10, by_score_desc);
        assert!(topk.is_empty());
        topk.insert((1, 0.3));
        topk.insert((2, 0.6));
        let items = topk.extract_ordered();
        assert_eq!(items, vec![(2, 0.6), (1, 0.3)]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut topk = BoundedTopK::new(0, by_score_desc);
        assert!(!topk.insert((1, 1.0)));
        assert!(topk.extract_ordered().is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut topk = BoundedTopK::new(2, by_score_desc);
        assert!(topk.insert((1, 0.5)));
        assert!(topk.insert((2, 0.5)));
        // equal to the worst held item, not strictly better
        assert!(!topk.insert((3, 0.5)));
        assert!(topk.insert((4, 0.8)));
        let items = topk.extract_ordered();
        assert_eq!(items, vec![(4, 0.8), (1, 0.5)]);

        let mut topk = BoundedTopK::new(5, by_score_desc);
        topk.extend(vec![(7, 0.1), (8, 0.4), (9, 0.1), (10, 0.4)]);
        let ids: Vec<u32> = topk.extract_ordered().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![8, 10, 7, 9]);
    }

    #[test]
    fn test_count_is_min_of_insertions_and_capacity() {
        for capacity in 0..6usize {
            for n in 0..10u32 {
                let mut topk = BoundedTopK::new(capacity, by_score_desc);
                // scores cycle so that ties and reorderings both occur
                topk.extend((0..n).map(|i| (i, ((i * 7) % 4) as f64)));
                let items = topk.extract_ordered();
                assert_eq!(items.len(), capacity.min(n as usize));
                for pair in items.windows(2) {
                    let order = by_score_desc(&pair[0], &pair[1]);
                    assert!(order == Ordering::Less
                        || (order == Ordering::Equal && pair[0].0 < pair[1].0));
                }
            }
        }
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut topk = BoundedTopK::new(2, by_score_desc);
        topk.extend(vec![(1, f64::NAN), (2, 1.0), (3, 2.0)]);
        let items = topk.extract_ordered();
        assert_eq!(items.len(), 2);
    }
}
