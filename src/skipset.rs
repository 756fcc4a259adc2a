//! The sorted-set container and its iterators.

use std::{cmp::Ordering, fmt, ptr};

use crate::error::{Error, Result};
use crate::level::{LevelGenerator, MAX_LEVEL};
use crate::node::{Node, NodeArena, NodeId};

/// A sorted set of unique values backed by a skip list.
///
/// Elements are kept in ascending `Ord` order in a multi-level chain:
/// every element sits in the bottom chain, and each one is promoted to the
/// next level up with probability 1/4, so the upper chains act as express
/// lanes that make insertion, removal and lookup expected `O(log n)`.
///
/// Equivalence is derived from ordering alone: two values are the same
/// element exactly when they compare [`Ordering::Equal`]. For a type whose
/// `Ord` looks only at part of the value, inserting a second value with an
/// equal key silently keeps the stored one, payload differences included.
///
/// Tower heights come from a per-set random generator. [`SkipSet::new`]
/// seeds it from OS entropy; [`SkipSet::with_seed`] pins it so a test can
/// reproduce the exact same internal layout. The layout never affects what
/// iteration yields, only the shape of the search structure.
///
/// # Examples
///
/// ```
/// use skipset::SkipSet;
///
/// let mut set = SkipSet::new();
/// set.insert(5);
/// set.insert(3);
/// set.insert(7);
/// set.insert(5);
///
/// assert_eq!(set.len(), 3);
/// let values: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(values, vec![3, 5, 7]);
/// ```
pub struct SkipSet<T> {
    /// Entry links of the head sentinel, one per level. The head holds no
    /// value and is permanently at the full height.
    head: Vec<Option<NodeId>>,
    arena: NodeArena<T>,
    /// Highest level currently holding at least one node; 0 when empty.
    level: usize,
    len: usize,
    rand: LevelGenerator,
}

impl<T: Ord> SkipSet<T> {
    /// An empty set with an entropy-seeded level generator.
    pub fn new() -> Self {
        Self::with_generator(LevelGenerator::new())
    }

    /// An empty set whose level generator is seeded with `seed`.
    ///
    /// Two sets built with the same seed and fed the same insertion
    /// sequence grow identical towers, which makes the internal layout
    /// reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(LevelGenerator::with_seed(seed))
    }

    fn with_generator(rand: LevelGenerator) -> Self {
        SkipSet {
            head: vec![None; MAX_LEVEL + 1],
            arena: NodeArena::new(),
            level: 0,
            len: 0,
            rand,
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if a value comparing equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Searches for `value` and returns a cursor at the matching element,
    /// or the end cursor if no element compares equal to it.
    ///
    /// ```
    /// use skipset::SkipSet;
    ///
    /// let set: SkipSet<i32> = [3, 5, 7].into_iter().collect();
    /// assert_eq!(set.find(&5).value(), Ok(&5));
    /// assert!(set.find(&4).is_end());
    /// ```
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        Cursor {
            set: self,
            node: self.find_node(value),
        }
    }

    /// Inserts `value` into the set.
    ///
    /// If an element comparing [`Ordering::Equal`] to `value` is already
    /// stored, nothing happens: the stored element is kept untouched and
    /// `value` is dropped. The new element's tower height is drawn from
    /// the set's level generator and fixed for the element's lifetime.
    pub fn insert(&mut self, value: T) {
        let update = self.update_path(&value);

        if let Some(id) = self.successor(update[0], 0) {
            if self.arena[id].value.cmp(&value) == Ordering::Equal {
                return;
            }
        }

        let new_level = self.rand.random();
        if new_level > self.level {
            self.level = new_level;
        }

        // Splice bottom-up: the new node takes over each recorded
        // position's successor, then becomes that successor itself.
        let id = self.arena.alloc(Node::new(value, new_level));
        for i in 0..=new_level {
            let next = self.successor(update[i], i);
            self.arena[id].forward[i] = next;
            self.set_successor(update[i], i, Some(id));
        }
        self.len += 1;
    }

    /// Removes the element comparing equal to `value`, if present.
    ///
    /// Returns `true` if an element was removed. A miss leaves the set
    /// untouched and returns `false`.
    pub fn remove(&mut self, value: &T) -> bool {
        let update = self.update_path(value);

        let victim = match self.successor(update[0], 0) {
            Some(id) if self.arena[id].value.cmp(value) == Ordering::Equal => id,
            _ => return false,
        };

        // Unsplice bottom-up, stopping at the first level whose recorded
        // position does not link to the victim; the victim's tower does
        // not reach any level above that.
        for i in 0..=self.level {
            if self.successor(update[i], i) != Some(victim) {
                break;
            }
            let next = self.arena[victim].forward[i];
            self.set_successor(update[i], i, next);
        }

        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }

        self.arena.remove(victim);
        self.len -= 1;
        true
    }

    /// Visits the elements in ascending order.
    ///
    /// The iterator borrows the set, so inserting or removing while it is
    /// alive is rejected at compile time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            node: self.head[0],
            remaining: self.len,
        }
    }

    /// Drops every element.
    ///
    /// The set is afterwards indistinguishable from a freshly built one
    /// except that the level generator keeps its state; clearing does not
    /// reseed.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head.fill(None);
        self.level = 0;
        self.len = 0;
    }

    /// Next link after `pos` at `level`, where `None` denotes the head.
    fn successor(&self, pos: Option<NodeId>, level: usize) -> Option<NodeId> {
        match pos {
            Some(id) => self.arena[id].forward[level],
            None => self.head[level],
        }
    }

    fn set_successor(&mut self, pos: Option<NodeId>, level: usize, to: Option<NodeId>) {
        match pos {
            Some(id) => self.arena[id].forward[level] = to,
            None => self.head[level] = to,
        }
    }

    /// Descends from the top level recording, per level, the rightmost
    /// position whose value is still less than `value`. Slots above the
    /// current level stay `None`, i.e. the head.
    fn update_path(&self, value: &T) -> Vec<Option<NodeId>> {
        let mut update: Vec<Option<NodeId>> = vec![None; MAX_LEVEL + 1];
        let mut pos: Option<NodeId> = None;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.successor(pos, i) {
                if self.arena[next].value.cmp(value) == Ordering::Less {
                    pos = Some(next);
                } else {
                    break;
                }
            }
            update[i] = pos;
        }
        update
    }

    /// Search without recording the descent path.
    fn find_node(&self, value: &T) -> Option<NodeId> {
        let mut pos: Option<NodeId> = None;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.successor(pos, i) {
                if self.arena[next].value.cmp(value) == Ordering::Less {
                    pos = Some(next);
                } else {
                    break;
                }
            }
        }
        match self.successor(pos, 0) {
            Some(id) if self.arena[id].value.cmp(value) == Ordering::Equal => Some(id),
            _ => None,
        }
    }

    /// Unlinks and returns the smallest element.
    fn pop_front(&mut self) -> Option<T> {
        let id = self.head[0]?;
        for i in 0..=self.arena[id].level() {
            self.head[i] = self.arena[id].forward[i];
        }
        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }
        self.len -= 1;
        Some(self.arena.remove(id).value)
    }

    /// Walks every chain and asserts the structural invariants.
    #[cfg(test)]
    fn check_invariants(&self) {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut prev: Option<NodeId> = None;
        let mut count = 0;
        let mut node = self.head[0];
        while let Some(id) = node {
            assert!(seen.insert(id), "node linked twice at level 0");
            if let Some(p) = prev {
                assert!(
                    self.arena[p].value.cmp(&self.arena[id].value) == Ordering::Less,
                    "level 0 chain out of order"
                );
            }
            prev = Some(id);
            count += 1;
            node = self.arena[id].forward[0];
        }
        assert_eq!(count, self.len, "len out of sync with level 0 chain");
        assert_eq!(self.arena.len(), self.len, "arena holds unreachable nodes");

        for i in 1..=self.level {
            let mut prev: Option<NodeId> = None;
            let mut node = self.head[i];
            while let Some(id) = node {
                assert!(seen.contains(&id), "level {} node missing from level 0", i);
                assert!(self.arena[id].level() >= i, "tower shorter than its chain");
                if let Some(p) = prev {
                    assert!(
                        self.arena[p].value.cmp(&self.arena[id].value) == Ordering::Less,
                        "level {} chain out of order",
                        i
                    );
                }
                prev = Some(id);
                node = self.arena[id].forward[i];
            }
        }

        if self.level > 0 {
            assert!(self.head[self.level].is_some(), "level not lowered");
        }
        for i in self.level + 1..=MAX_LEVEL {
            assert!(self.head[i].is_none(), "node linked above current level");
        }
    }
}

impl<T: Ord> Default for SkipSet<T> {
    fn default() -> Self {
        SkipSet::new()
    }
}

/// A logical copy: a fresh set is built and the elements re-inserted in
/// ascending order, drawing new tower heights from a fresh entropy-seeded
/// generator. The copy holds the same elements but its internal layout is
/// independent of the source's.
impl<T: Ord + Clone> Clone for SkipSet<T> {
    fn clone(&self) -> Self {
        let mut copy = SkipSet::new();
        for value in self {
            copy.insert(value.clone());
        }
        copy
    }
}

impl<T: Ord> Extend<T> for SkipSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SkipSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> IntoIterator for SkipSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the set, yielding its elements in ascending order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { set: self }
    }
}

impl<'a, T: Ord> IntoIterator for &'a SkipSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Two sets are equal when they hold pairwise order-equal elements.
impl<T: Ord> PartialEq for SkipSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.cmp(b) == Ordering::Equal)
    }
}

impl<T: Ord> Eq for SkipSet<T> {}

impl<T: Ord + fmt::Debug> fmt::Debug for SkipSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Handle at an element of a set, or past the last one.
///
/// Returned by [`SkipSet::find`]. The end cursor marks a failed search and
/// the position after the last element; asking it for a value yields
/// [`Error::CursorAtEnd`]. A cursor borrows its set, so the set cannot be
/// mutated while any cursor is alive.
pub struct Cursor<'a, T> {
    set: &'a SkipSet<T>,
    node: Option<NodeId>,
}

impl<'a, T> Cursor<'a, T> {
    /// The element under the cursor.
    ///
    /// Fails with [`Error::CursorAtEnd`] when the cursor is past the last
    /// element.
    pub fn value(&self) -> Result<&'a T> {
        match self.node {
            Some(id) => Ok(&self.set.arena[id].value),
            None => Err(Error::CursorAtEnd),
        }
    }

    /// Returns `true` when the cursor is past the last element.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Steps to the next element in ascending order.
    ///
    /// Returns `true` if the cursor lands on an element. Advancing past
    /// the last element yields the end cursor, and advancing the end
    /// cursor is a no-op.
    pub fn advance(&mut self) -> bool {
        if let Some(id) = self.node {
            self.node = self.set.arena[id].forward[0];
        }
        self.node.is_some()
    }
}

/// Cursors are equal when they sit on the same element of the same set.
/// All end cursors compare equal to each other.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.set, other.set),
            _ => false,
        }
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

/// Borrowing iterator over a set in ascending order.
pub struct Iter<'a, T> {
    set: &'a SkipSet<T>,
    node: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.node?;
        let node = &self.set.arena[id];
        self.node = node.forward[0];
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Owning iterator that drains a set front-first.
pub struct IntoIter<T> {
    set: SkipSet<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.set.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}
