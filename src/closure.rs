//! In-place closure operations on a [`RelationMatrix`].

use crate::matrix::RelationMatrix;

impl RelationMatrix {
    /// Relate every element to itself.
    pub fn reflexive_closure(&mut self) {
        for i in 0..self.elements {
            self[(i, i)] = true;
        }
    }

    /// For every related pair, relate the reversed pair as well.
    pub fn symmetric_closure(&mut self) {
        for i in 0..self.elements {
            for j in 0..i {
                if self[(i, j)] {
                    self[(j, i)] = true;
                }
                if self[(j, i)] {
                    self[(i, j)] = true;
                }
            }
        }
    }

    /// Warshall's algorithm. The outer `k` loop must run sequentially: step
    /// `k` has to finish for every row before step `k + 1` reads them.
    pub fn transitive_closure(&mut self) {
        for k in 0..self.elements {
            for i in 0..self.elements {
                if self[(i, k)] {
                    self.row_or(i, k);
                }
            }
        }
    }

    /// Turn the relation into the smallest equivalence relation containing
    /// it.
    ///
    /// The reflexive and symmetric closures run before the transitive one;
    /// Warshall propagates only pairs already present, so symmetrizing
    /// afterwards would under-close the relation.
    pub fn minimal_equivalence(&mut self) {
        self.reflexive_closure();
        self.symmetric_closure();
        self.transitive_closure();
        debug_assert!(self.is_equivalence());
    }
}
