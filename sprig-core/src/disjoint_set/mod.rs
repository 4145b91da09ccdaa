//! Union-find (disjoint set union) over a fixed universe of element indices.
//!
//! Kruskal's builder uses this structure to decide whether an edge joins two
//! separate components or would close a cycle. `find` compresses paths
//! iteratively and `union` attaches by rank, which together keep the amortised
//! cost of both operations near constant.

use crate::error::DisjointSetError;

type SetResult<T> = core::result::Result<T, DisjointSetError>;

/// Partition of the elements `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use sprig_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(0, 3)?);
/// assert_eq!(set.component_count(), 3);
/// # Ok::<(), sprig_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
    path: Vec<usize>,
}

impl DisjointSet {
    /// Creates a set where every element is its own singleton component.
    ///
    /// Aborts like any `Vec` allocation when `len` elements cannot be
    /// allocated; use [`DisjointSet::try_new`] for caller-supplied sizes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
            path: Vec::new(),
        }
    }

    /// Creates a set of `len` singletons, reporting allocation failure
    /// instead of aborting.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AllocationFailed`] when the parent or rank
    /// storage for `len` elements cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use sprig_core::{DisjointSet, DisjointSetError};
    ///
    /// assert_eq!(DisjointSet::try_new(3)?.component_count(), 3);
    /// assert!(matches!(
    ///     DisjointSet::try_new(usize::MAX),
    ///     Err(DisjointSetError::AllocationFailed { len: usize::MAX })
    /// ));
    /// # Ok::<(), DisjointSetError>(())
    /// ```
    pub fn try_new(len: usize) -> SetResult<Self> {
        let failed = |_| DisjointSetError::AllocationFailed { len };
        let mut parent = Vec::new();
        parent.try_reserve_exact(len).map_err(failed)?;
        let mut rank = Vec::new();
        rank.try_reserve_exact(len).map_err(failed)?;

        parent.extend(0..len);
        rank.resize(len, 0);
        Ok(Self {
            parent,
            rank,
            components: len,
            path: Vec::new(),
        })
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the universe has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `element`'s component.
    ///
    /// Every element visited on the way is re-pointed directly at the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when `element >= len()`.
    pub fn find(&mut self, element: usize) -> SetResult<usize> {
        self.path.clear();
        let mut current = element;
        let mut parent = self.parent_of(current)?;
        while parent != current {
            self.path.push(current);
            current = parent;
            parent = self.parent_of(current)?;
        }

        for node in self.path.drain(..) {
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = current;
            }
        }
        Ok(current)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` when both already share a component. Otherwise the
    /// lower-ranked root is attached under the higher-ranked one; on a tie,
    /// `right`'s root goes under `left`'s root and that root's rank grows.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either element is outside
    /// the universe. The set is left unchanged in that case.
    pub fn union(&mut self, left: usize, right: usize) -> SetResult<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(left_root)?;
        let right_rank = self.rank_of(right_root)?;
        let (root, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.set_parent(child, root)?;
        if left_rank == right_rank {
            self.set_rank(root, left_rank.saturating_add(1))?;
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] when either element is outside
    /// the universe.
    pub fn connected(&mut self, left: usize, right: usize) -> SetResult<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn out_of_range(&self, element: usize) -> DisjointSetError {
        DisjointSetError::OutOfRange {
            element,
            len: self.len(),
        }
    }

    fn parent_of(&self, element: usize) -> SetResult<usize> {
        self.parent
            .get(element)
            .copied()
            .ok_or_else(|| self.out_of_range(element))
    }

    fn rank_of(&self, element: usize) -> SetResult<u8> {
        self.rank
            .get(element)
            .copied()
            .ok_or_else(|| self.out_of_range(element))
    }

    fn set_parent(&mut self, element: usize, parent: usize) -> SetResult<()> {
        let len = self.len();
        let slot = self
            .parent
            .get_mut(element)
            .ok_or(DisjointSetError::OutOfRange { element, len })?;
        *slot = parent;
        Ok(())
    }

    fn set_rank(&mut self, element: usize, rank: u8) -> SetResult<()> {
        let len = self.len();
        let slot = self
            .rank
            .get_mut(element)
            .ok_or(DisjointSetError::OutOfRange { element, len })?;
        *slot = rank;
        Ok(())
    }
}
