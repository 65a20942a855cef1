//! Structural analysis of finite binary relations on a set of `n` labeled
//! elements: decide whether a relation is an equivalence relation, close it
//! into the smallest equivalence relation containing it, extract its
//! equivalence classes, and count how many equivalence relations an
//! `n`-element set admits at all.
//!
//! Example usage:
//! ```
//! use relations::RelationMatrix;
//!
//! let mut relation = RelationMatrix::parse(&mut "3\n0 1 0\n0 0 1\n0 0 0\n".as_bytes()).unwrap();
//! assert!(!relation.is_equivalence());
//!
//! relation.minimal_equivalence();
//! assert!(relation.is_equivalence());
//! assert_eq!(relation.partition().to_string(), "{0,1,2}");
//! ```

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod closure;
pub mod count;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod partition;
pub mod properties;

pub use count::count_equivalence_relations;
pub use error::RelationError;
pub use generator::{RelationGenerator, RelationKind};
pub use matrix::{RelationMatrix, MAX_N};
pub use partition::{Partition, UnionFind};

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a standard rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for b in &mut seed {
            *b = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }

    #[test]
    fn two_classes_end_to_end() {
        let mut input = "3\n1 1 0\n1 1 0\n0 0 1\n".as_bytes();
        let relation = RelationMatrix::parse(&mut input).unwrap();
        assert!(relation.is_reflexive());
        assert!(relation.is_symmetric());
        assert!(relation.is_transitive());
        assert!(relation.is_equivalence());
        assert_eq!(relation.partition().to_string(), "{0,1} {2}");
    }

    #[test]
    fn asymmetric_relation_end_to_end() {
        let mut input = "3\n1 0 0\n0 1 1\n1 1 1\n".as_bytes();
        let mut relation = RelationMatrix::parse(&mut input).unwrap();
        // (0, 2) is unrelated while (2, 0) is related.
        assert!(!relation.is_symmetric());
        assert!(!relation.is_equivalence());
        relation.minimal_equivalence();
        assert!(relation.is_equivalence());
    }
}
