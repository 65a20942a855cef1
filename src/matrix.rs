use std::{
    fmt::{self, Display},
    io::BufRead,
    ops::{Index, IndexMut},
};

use crate::error::RelationError;

/// Largest supported element-set size.
pub const MAX_N: usize = 100;

/// A binary relation on `n` labeled elements, stored as a dense row-major
/// adjacency matrix. `matrix[(i, j)]` is `true` iff element `i` is related
/// to element `j`.
#[derive(Debug, PartialEq, Eq)]
pub struct RelationMatrix {
    pub(crate) elements: usize,
    pub(crate) entries: Vec<bool>,
}

impl Clone for RelationMatrix {
    fn clone(&self) -> Self {
        Self { elements: self.elements, entries: self.entries.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.elements = source.elements;
        self.entries.clone_from(&source.entries);
    }
}

impl RelationMatrix {
    /// Create the empty relation on `elements` elements.
    ///
    /// Fails with [`RelationError::InvalidSize`] unless
    /// `1 <= elements <= MAX_N`.
    pub fn new(elements: usize) -> Result<Self, RelationError> {
        if elements == 0 || elements > MAX_N {
            return Err(RelationError::InvalidSize(elements));
        }
        Ok(Self { elements, entries: vec![false; elements * elements] })
    }

    /// Create a relation from a flat row-major entry list of length
    /// `elements * elements`.
    pub fn from_vec(elements: usize, entries: Vec<bool>) -> Result<Self, RelationError> {
        if elements == 0 || elements > MAX_N {
            return Err(RelationError::InvalidSize(elements));
        }
        if entries.len() != elements * elements {
            return Err(RelationError::InvalidInput(format!(
                "expected {} entries, got {}",
                elements * elements,
                entries.len()
            )));
        }
        Ok(Self { elements, entries })
    }

    /// The number of elements the relation ranges over.
    pub fn elements(&self) -> usize {
        self.elements
    }

    fn check_index(&self, i: usize, j: usize) -> Result<(), RelationError> {
        if i < self.elements && j < self.elements {
            Ok(())
        } else {
            Err(RelationError::IndexOutOfRange { i, j, n: self.elements })
        }
    }

    /// Whether `i` is related to `j`. Fails with
    /// [`RelationError::IndexOutOfRange`] for indices outside `0..n`.
    pub fn get(&self, i: usize, j: usize) -> Result<bool, RelationError> {
        self.check_index(i, j)?;
        Ok(self.entries[i * self.elements + j])
    }

    /// Set whether `i` is related to `j`. Fails with
    /// [`RelationError::IndexOutOfRange`] for indices outside `0..n`.
    pub fn set(&mut self, i: usize, j: usize, value: bool) -> Result<(), RelationError> {
        self.check_index(i, j)?;
        self.entries[i * self.elements + j] = value;
        Ok(())
    }

    /// OR the entries of row `source` into row `target`, in place. This is
    /// the whole-row merge the Warshall step relies on.
    ///
    /// # Panics
    ///
    /// Panics if `target` or `source` is not a valid row index.
    pub fn row_or(&mut self, target: usize, source: usize) {
        assert!(target < self.elements && source < self.elements);
        if target == source {
            return;
        }
        let n = self.elements;
        // Split the backing vec so both rows can be borrowed at once.
        let (t, s) = if target < source {
            let (head, tail) = self.entries.split_at_mut(source * n);
            (&mut head[target * n..(target + 1) * n], &tail[..n])
        } else {
            let (head, tail) = self.entries.split_at_mut(target * n);
            (&mut tail[..n], &head[source * n..(source + 1) * n])
        };
        for (t_entry, s_entry) in t.iter_mut().zip(s) {
            *t_entry |= *s_entry;
        }
    }

    pub(crate) fn row(&self, i: usize) -> &[bool] {
        &self.entries[i * self.elements..(i + 1) * self.elements]
    }

    /// Parse a relation from `f`: one line holding `n`, then `n` lines of
    /// `n` space-separated `0`/`1` tokens.
    ///
    /// Nothing is accepted partially; the first malformed size, row or token
    /// rejects the whole input.
    pub fn parse<T: BufRead>(f: &mut T) -> Result<Self, RelationError> {
        let mut buf = String::new();
        if read_line(f, &mut buf)? == 0 {
            return Err(RelationError::InvalidInput("missing size line".to_owned()));
        }
        let elements: usize = buf
            .trim()
            .parse()
            .map_err(|_| RelationError::InvalidInput(format!("not a size: {:?}", buf.trim())))?;
        let mut matrix = RelationMatrix::new(elements)?;
        for i in 0..elements {
            buf.clear();
            if read_line(f, &mut buf)? == 0 {
                return Err(RelationError::InvalidInput(format!(
                    "expected {} rows, got {}",
                    elements, i
                )));
            }
            matrix.parse_row(i, &buf)?;
        }
        Ok(matrix)
    }

    fn parse_row(&mut self, i: usize, line: &str) -> Result<(), RelationError> {
        let mut j = 0;
        for token in line.split_whitespace() {
            if j == self.elements {
                return Err(RelationError::InvalidInput(format!(
                    "row {} has more than {} entries",
                    i, self.elements
                )));
            }
            self.entries[i * self.elements + j] = match token {
                "0" => false,
                "1" => true,
                other => {
                    return Err(RelationError::InvalidInput(format!(
                        "entry ({}, {}) is {:?}, expected 0 or 1",
                        i, j, other
                    )))
                }
            };
            j += 1;
        }
        if j != self.elements {
            return Err(RelationError::InvalidInput(format!(
                "row {} has {} entries, expected {}",
                i, j, self.elements
            )));
        }
        Ok(())
    }
}

fn read_line<T: BufRead>(f: &mut T, buf: &mut String) -> Result<usize, RelationError> {
    f.read_line(buf)
        .map_err(|e| RelationError::InvalidInput(format!("failed to read line: {}", e)))
}

impl Index<(usize, usize)> for RelationMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.elements && j < self.elements);
        &self.entries[i * self.elements + j]
    }
}

impl IndexMut<(usize, usize)> for RelationMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.elements && j < self.elements);
        &mut self.entries[i * self.elements + j]
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.elements {
            for (j, &v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if v { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
