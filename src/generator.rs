//! Random relation generation for test data.
//!
//! The generator owns its random number generator instead of sharing a
//! process-wide one, so every run can be reproduced by constructing it with
//! [`RelationGenerator::from_seed`].

use std::{
    fmt::{self, Display},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use rand::{
    distr::{Bernoulli, Distribution},
    seq::SliceRandom,
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Rng;

use crate::{error::RelationError, matrix::RelationMatrix};

/// A relation property that [`RelationGenerator::specific_relation`] can
/// guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    Reflexive,
    Symmetric,
    Transitive,
}

impl FromStr for RelationKind {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reflexive" => Ok(RelationKind::Reflexive),
            "symmetric" => Ok(RelationKind::Symmetric),
            "transitive" => Ok(RelationKind::Transitive),
            other => Err(RelationError::UnknownRelationType(other.to_owned())),
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Reflexive => "reflexive",
            RelationKind::Symmetric => "symmetric",
            RelationKind::Transitive => "transitive",
        };
        write!(f, "{}", name)
    }
}

struct SuiteCase {
    elements: usize,
    description: &'static str,
    classes: usize,
    density: f64,
}

// One equivalence and one non-equivalence block per case, spanning the
// supported size range.
const SUITE_CASES: &[SuiteCase] = &[
    SuiteCase { elements: 1, description: "single element", classes: 1, density: 0.0 },
    SuiteCase { elements: 2, description: "smallest nontrivial", classes: 1, density: 0.4 },
    SuiteCase { elements: 5, description: "medium", classes: 2, density: 0.4 },
    SuiteCase { elements: 20, description: "large", classes: 5, density: 0.3 },
    SuiteCase { elements: 99, description: "near maximum", classes: 7, density: 0.3 },
];

/// Generator of random relation matrices with and without specific
/// properties.
pub struct RelationGenerator<R: Rng = ChaCha20Rng> {
    rng: R,
}

impl RelationGenerator<ChaCha20Rng> {
    /// A generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: ChaCha20Rng::from_os_rng() }
    }

    /// A generator with a fixed seed. Two generators built from the same
    /// seed produce identical matrices in identical call order.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }
}

impl Default for RelationGenerator<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RelationGenerator<R> {
    /// A generator driven by a caller-supplied rng.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// A uniformly random relation where each entry is 1 with probability
    /// `density`.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not in `0.0..=1.0`.
    pub fn random_relation(
        &mut self,
        elements: usize,
        density: f64,
    ) -> Result<RelationMatrix, RelationError> {
        let mut matrix = RelationMatrix::new(elements)?;
        let dist = Bernoulli::new(density).unwrap();
        for entry in matrix.entries.iter_mut() {
            *entry = dist.sample(&mut self.rng);
        }
        Ok(matrix)
    }

    /// A random equivalence relation with (at most) `classes` equivalence
    /// classes, built by shuffling a class assignment and relating every
    /// pair with equal assignments.
    pub fn equivalence_relation(
        &mut self,
        elements: usize,
        classes: usize,
    ) -> Result<RelationMatrix, RelationError> {
        let mut matrix = RelationMatrix::new(elements)?;
        let classes = classes.clamp(1, elements);
        let mut assignment: Vec<usize> = (0..elements).map(|i| i % classes).collect();
        assignment.shuffle(&mut self.rng);
        for i in 0..elements {
            for j in 0..elements {
                if assignment[i] == assignment[j] {
                    matrix[(i, j)] = true;
                }
            }
        }
        debug_assert!(matrix.is_equivalence());
        Ok(matrix)
    }

    /// A random relation guaranteed to have the property named by `kind`.
    pub fn specific_relation(
        &mut self,
        elements: usize,
        kind: RelationKind,
    ) -> Result<RelationMatrix, RelationError> {
        match kind {
            RelationKind::Reflexive => {
                let mut matrix = self.random_relation(elements, 0.3)?;
                matrix.reflexive_closure();
                Ok(matrix)
            }
            RelationKind::Symmetric => {
                let mut matrix = self.random_relation(elements, 0.3)?;
                matrix.symmetric_closure();
                Ok(matrix)
            }
            RelationKind::Transitive => self.equivalence_relation(elements, elements / 2),
        }
    }

    /// An equivalence relation corrupted with a few one-directional edges,
    /// guaranteed to fail at least one equivalence property.
    pub fn almost_equivalence_relation(
        &mut self,
        elements: usize,
    ) -> Result<RelationMatrix, RelationError> {
        let mut matrix = self.equivalence_relation(elements, elements.div_ceil(3))?;
        if elements == 1 {
            // The only way a 1-element relation fails is irreflexivity.
            matrix[(0, 0)] = false;
            return Ok(matrix);
        }
        let modifications = (elements / 3).max(1);
        for _ in 0..modifications {
            let x = self.rng.random_range(0..elements);
            let y = self.rng.random_range(0..elements);
            if x != y {
                matrix[(x, y)] = true;
                let z = self.rng.random_range(0..elements);
                if z != x && z != y {
                    matrix[(y, z)] = true;
                }
            }
        }
        if matrix.is_equivalence() {
            // Every injected edge landed inside an existing class; break
            // symmetry at a fixed spot instead.
            matrix[(0, 1)] = !matrix[(1, 0)];
        }
        debug_assert!(!matrix.is_equivalence());
        Ok(matrix)
    }

    /// Write the labeled test suite to a file at `path`.
    ///
    /// Fails with [`RelationError::FileCreation`] if the path cannot be
    /// opened for writing.
    pub fn write_test_suite<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RelationError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_test_suite_to(&mut writer)
    }

    /// Write the labeled test suite to `writer`.
    ///
    /// Each block is a `# <description> - <label>` comment line, a line with
    /// `n`, `n` matrix rows and a blank line. Every case contributes one
    /// block labeled `equivalence` and one labeled `non-equivalence`, and
    /// the matrices really do satisfy their labels.
    pub fn write_test_suite_to<W: Write>(&mut self, writer: &mut W) -> Result<(), RelationError> {
        for case in SUITE_CASES {
            let equivalence = self.equivalence_relation(case.elements, case.classes)?;
            writeln!(writer, "# {} - equivalence", case.description)?;
            writeln!(writer, "{}", case.elements)?;
            write!(writer, "{}", equivalence)?;
            writeln!(writer)?;

            let non_equivalence = if case.elements >= 20 {
                self.almost_equivalence_relation(case.elements)?
            } else {
                // Low sizes just resample; a sparse random relation is
                // almost never an equivalence relation.
                loop {
                    let candidate = self.random_relation(case.elements, case.density)?;
                    if !candidate.is_equivalence() {
                        break candidate;
                    }
                }
            };
            writeln!(writer, "# {} - non-equivalence", case.description)?;
            writeln!(writer, "{}", case.elements)?;
            write!(writer, "{}", non_equivalence)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufRead;

    use super::*;

    #[test]
    fn kind_from_str() {
        assert_eq!("reflexive".parse::<RelationKind>().unwrap(), RelationKind::Reflexive);
        assert_eq!("symmetric".parse::<RelationKind>().unwrap(), RelationKind::Symmetric);
        assert_eq!("transitive".parse::<RelationKind>().unwrap(), RelationKind::Transitive);
        assert!(matches!(
            "partial".parse::<RelationKind>(),
            Err(RelationError::UnknownRelationType(s)) if s == "partial"
        ));
    }

    #[test]
    fn equivalence_relations_are_equivalences() {
        let mut generator = RelationGenerator::from_seed(7);
        for elements in [1, 2, 3, 5, 20, 99] {
            for classes in [1, 2, elements] {
                let matrix = generator.equivalence_relation(elements, classes).unwrap();
                assert!(matrix.is_equivalence());
                assert!(matrix.partition().len() <= classes.clamp(1, elements));
            }
        }
    }

    #[test]
    fn specific_relations_have_their_property() {
        let mut generator = RelationGenerator::from_seed(11);
        for elements in [1, 5, 20] {
            assert!(generator
                .specific_relation(elements, RelationKind::Reflexive)
                .unwrap()
                .is_reflexive());
            assert!(generator
                .specific_relation(elements, RelationKind::Symmetric)
                .unwrap()
                .is_symmetric());
            assert!(generator
                .specific_relation(elements, RelationKind::Transitive)
                .unwrap()
                .is_transitive());
        }
    }

    #[test]
    fn almost_equivalence_is_never_equivalence() {
        let mut generator = RelationGenerator::from_seed(13);
        for elements in [1, 2, 3, 5, 20, 99] {
            for _ in 0..10 {
                let matrix = generator.almost_equivalence_relation(elements).unwrap();
                assert!(!matrix.is_equivalence());
            }
        }
    }

    #[test]
    fn size_errors_propagate() {
        let mut generator = RelationGenerator::from_seed(17);
        assert!(matches!(
            generator.random_relation(0, 0.5),
            Err(RelationError::InvalidSize(0))
        ));
        assert!(matches!(
            generator.equivalence_relation(101, 3),
            Err(RelationError::InvalidSize(101))
        ));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = RelationGenerator::from_seed(42);
        let mut b = RelationGenerator::from_seed(42);
        for _ in 0..3 {
            assert_eq!(
                a.random_relation(10, 0.4).unwrap(),
                b.random_relation(10, 0.4).unwrap()
            );
            assert_eq!(
                a.equivalence_relation(10, 3).unwrap(),
                b.equivalence_relation(10, 3).unwrap()
            );
        }
    }

    #[test]
    fn suite_blocks_match_their_labels() {
        let mut generator = RelationGenerator::from_seed(23);
        let mut out = Vec::new();
        generator.write_test_suite_to(&mut out).unwrap();

        let mut reader = out.as_slice();
        let mut comment = String::new();
        let mut blocks = 0;
        while reader.read_line(&mut comment).unwrap() > 0 {
            assert!(comment.starts_with("# "));
            let expect_equivalence = comment.trim_end().ends_with("- equivalence");
            let matrix = RelationMatrix::parse(&mut reader).unwrap();
            assert_eq!(matrix.is_equivalence(), expect_equivalence);

            let mut blank = String::new();
            reader.read_line(&mut blank).unwrap();
            assert_eq!(blank, "\n");
            comment.clear();
            blocks += 1;
        }
        // One equivalence and one non-equivalence block per suite case.
        assert_eq!(blocks, 10);
    }
}
