use std::cmp::Ordering;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderedListError {
    #[error("Item not found")]
    NotFound,

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What `insert` does with an item equal to one already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplicates {
    /// Equal items are a no-op
    #[default]
    Ignore,
    /// Equal items are kept next to each other
    Keep,
}

/// Sorted sequence backed by a `Vec`.
///
/// Lookups are binary searches over the stored order, insertions shift the
/// tail of the vector. Items are always in ascending order.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    items: Vec<T>,
    duplicates: Duplicates,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            duplicates: Duplicates::Ignore,
        }
    }
}

impl<T> OrderedList<T> {
    /// Create an empty, duplicate-free list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list that keeps equal items
    pub fn allowing_duplicates() -> Self {
        Self {
            items: Vec::new(),
            duplicates: Duplicates::Keep,
        }
    }

    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// First position whose item is not less than the target.
    ///
    /// `is_less` must answer "is this stored item strictly less than the
    /// target" consistently with the list order.
    pub fn bisect_left_by<F>(&self, mut is_less: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut lower = 0;
        let mut upper = self.items.len();

        while lower < upper {
            let mid = lower + (upper - lower) / 2;
            if is_less(&self.items[mid]) {
                lower = mid + 1;
            } else {
                upper = mid;
            }
        }

        lower
    }

    /// Position of the first item for which `cmp` returns `Equal`.
    ///
    /// `cmp` compares a stored item against the target.
    pub fn find_by<F>(&self, mut cmp: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let index = self.bisect_left_by(|item| cmp(item) == Ordering::Less);
        match self.items.get(index) {
            Some(item) if cmp(item) == Ordering::Equal => Some(index),
            _ => None,
        }
    }

    /// Remove and return the last item
    pub fn pop(&mut self) -> Result<T, OrderedListError> {
        self.items.pop().ok_or(OrderedListError::IndexOutOfRange {
            index: 0,
            len: 0,
        })
    }

    /// Remove and return the item at `index`
    pub fn pop_at(&mut self, index: usize) -> Result<T, OrderedListError> {
        if index >= self.items.len() {
            return Err(OrderedListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }
}

impl<T: Ord> OrderedList<T> {
    /// Insert keeping the order. Returns `false` when the item was a
    /// duplicate and the list ignores duplicates.
    pub fn insert(&mut self, item: T) -> bool {
        let index = self.bisect_left_by(|stored| *stored < item);

        if self.duplicates == Duplicates::Ignore && self.items.get(index) == Some(&item) {
            return false;
        }

        self.items.insert(index, item);
        true
    }

    pub fn find(&self, target: &T) -> Option<usize> {
        self.find_by(|item| item.cmp(target))
    }

    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    pub fn index_of(&self, target: &T) -> Result<usize, OrderedListError> {
        self.find(target).ok_or(OrderedListError::NotFound)
    }

    /// Contiguous run of items equal to `target`
    pub fn positions(&self, target: &T) -> Result<Range<usize>, OrderedListError> {
        let start = self.index_of(target)?;
        let end = self.bisect_left_by(|item| item <= target);
        Ok(start..end)
    }

    /// Remove one item equal to `target`
    pub fn remove(&mut self, target: &T) -> Result<T, OrderedListError> {
        let index = self.index_of(target)?;
        self.pop_at(index)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T: Ord> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
