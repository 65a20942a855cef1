//! Predicates over a [`RelationMatrix`]. All of these are pure: they never
//! mutate the matrix and may be called at any time.

use crate::matrix::RelationMatrix;

impl RelationMatrix {
    /// Whether every element is related to itself.
    #[must_use]
    pub fn is_reflexive(&self) -> bool {
        for i in 0..self.elements {
            if !self[(i, i)] {
                return false;
            }
        }
        true
    }

    /// Whether `i` related to `j` always implies `j` related to `i`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.elements {
            for j in 0..i {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Whether `i` related to `k` and `k` related to `j` always implies `i`
    /// related to `j`.
    ///
    /// `k` is the outer loop, the same traversal order the transitive
    /// closure uses.
    #[must_use]
    pub fn is_transitive(&self) -> bool {
        for k in 0..self.elements {
            for i in 0..self.elements {
                if !self[(i, k)] {
                    continue;
                }
                for j in 0..self.elements {
                    if self[(k, j)] && !self[(i, j)] {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether the relation is reflexive, symmetric and transitive.
    #[must_use]
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }
}
