//! Equivalence-class extraction via a union-find (disjoint-set) structure.

use std::fmt::{self, Display};

use crate::matrix::RelationMatrix;

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Every element starts as its own singleton set.
    #[must_use]
    pub fn new(elements: usize) -> Self {
        Self { parent: (0..elements).collect(), rank: vec![0; elements] }
    }

    /// The representative of the set containing `x`. Iterative: compresses
    /// the walked path by pointing each node at its grandparent, so no
    /// recursion depth is ever at stake.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `x` and `y`. The lower-rank root is
    /// attached under the higher-rank one; rank ties increment the survivor.
    pub fn union(&mut self, x: usize, y: usize) {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        if self.rank[rx] == self.rank[ry] {
            self.rank[rx] += 1;
        }
    }
}

/// The equivalence classes of a relation. Classes are ordered by ascending
/// union-find root id; members within a class by ascending index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub(crate) classes: Vec<Vec<usize>>,
}

impl Partition {
    /// The equivalence classes, in ascending root-id order.
    pub fn classes(&self) -> &[Vec<usize>] {
        &self.classes
    }

    pub fn into_classes(self) -> Vec<Vec<usize>> {
        self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

impl Display for Partition {
    /// Renders as brace-delimited member lists, one group per class:
    /// `{0,1} {2}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, class) in self.classes.iter().enumerate() {
            if c > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{")?;
            for (m, member) in class.iter().enumerate() {
                if m > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", member)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

impl RelationMatrix {
    /// The partition of the element set into equivalence classes.
    ///
    /// Only defined when the relation is an equivalence relation; for any
    /// other relation the result is empty. That empty result is a "no
    /// partition exists" signal, not an error.
    ///
    /// A fresh union-find is built on every call, so earlier partitions
    /// never leak unions into this one. The result is not cached and goes
    /// stale as soon as the matrix is mutated.
    #[must_use]
    pub fn partition(&self) -> Partition {
        if !self.is_equivalence() {
            return Partition { classes: Vec::new() };
        }

        let mut sets = UnionFind::new(self.elements);
        for i in 0..self.elements {
            for j in 0..self.elements {
                if self[(i, j)] {
                    sets.union(i, j);
                }
            }
        }

        // Bucket elements under their root; walking buckets in root order
        // gives ascending root id across classes, and the i scan gives
        // ascending members within each.
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); self.elements];
        for i in 0..self.elements {
            let root = sets.find(i);
            buckets[root].push(i);
        }
        Partition { classes: buckets.into_iter().filter(|b| !b.is_empty()).collect() }
    }
}
