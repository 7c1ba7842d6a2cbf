use std::str::FromStr;

use derive_getters::Getters;

use crate::pairwise::global::Error;
use crate::pairwise::scoring::{equiv, gaps, symbols, Delegate, Score};

const UNKNOWN: u8 = u8::MAX;

/// Dense substitution table over byte symbols, e.g. BLOSUM62 for proteins or NUC.4.4 for DNA.
///
/// Lookups are case-insensitive for letters. Symbols outside the alphabet score as the lowest
/// value of the table.
#[derive(Clone, PartialEq, Eq, Debug, Getters)]
pub struct SubstitutionMatrix<S: Score> {
    name: String,
    alphabet: Vec<u8>,
    #[getter(skip)]
    index: Vec<u8>,
    #[getter(skip)]
    scores: Vec<S>,
    fallback: S,
}

impl<S: Score> SubstitutionMatrix<S> {
    fn assemble(name: String, alphabet: Vec<u8>, scores: Vec<S>) -> Self {
        let mut index = vec![UNKNOWN; 256];
        for (ind, symbol) in alphabet.iter().enumerate() {
            index[*symbol as usize] = ind as u8;
        }
        // Lowercase letters share rows with their uppercase versions unless listed explicitly
        for (ind, symbol) in alphabet.iter().enumerate() {
            let lower = symbol.to_ascii_lowercase() as usize;
            if index[lower] == UNKNOWN {
                index[lower] = ind as u8;
            }
        }
        let fallback = scores.iter().copied().min().unwrap_or_else(S::zero);

        Self {
            name,
            alphabet,
            index,
            scores,
            fallback,
        }
    }

    fn embedded<const N: usize>(name: &str, alphabet: &[u8; N], rows: &[[i8; N]; N]) -> Self
    where
        S: From<i8>,
    {
        let scores = rows
            .iter()
            .flatten()
            .map(|x| <S as From<i8>>::from(*x))
            .collect();
        Self::assemble(name.to_string(), alphabet.to_vec(), scores)
    }

    /// Substitution score for a pair of symbols.
    #[inline(always)]
    pub fn get(&self, a: u8, b: u8) -> S {
        let (row, col) = (self.index[a as usize], self.index[b as usize]);
        if row == UNKNOWN || col == UNKNOWN {
            return self.fallback;
        }
        self.scores[row as usize * self.alphabet.len() + col as usize]
    }

    /// Combine the matrix with gap scores into a complete scheme. The matrix also classifies
    /// aligned pairs: identical symbols match, positive-scoring pairs are equivalent.
    pub fn with_gaps<G: gaps::Scorer<Score = S>>(self, gaps: G) -> Delegate<S, u8, Self, G, Self> {
        Delegate::new(self.clone(), gaps, self)
    }
}

impl<S: Score> FromStr for SubstitutionMatrix<S> {
    type Err = Error;

    /// Parse a matrix in the NCBI/EMBOSS text layout: `#` comments, a header row of symbols and
    /// one row per symbol starting with the symbol itself.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| Error::Configuration {
            field: "matrix",
            reason,
        };
        let symbol = |token: &str| match token.as_bytes() {
            [x] => Ok(*x),
            _ => Err(invalid(format!("expected a single-byte symbol, got {token:?}"))),
        };

        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| invalid("matrix has no header row".to_string()))?;
        let alphabet = header
            .split_whitespace()
            .map(symbol)
            .collect::<Result<Vec<_>, _>>()?;
        if alphabet.is_empty() || alphabet.len() >= UNKNOWN as usize {
            return Err(invalid(format!(
                "alphabet size must be in 1..{UNKNOWN}, got {}",
                alphabet.len()
            )));
        }

        let size = alphabet.len();
        let mut scores: Vec<Option<S>> = vec![None; size * size];
        for line in lines {
            let mut tokens = line.split_whitespace();
            let head = symbol(tokens.next().unwrap_or_default())?;
            let row = alphabet
                .iter()
                .position(|x| *x == head)
                .ok_or_else(|| invalid(format!("row symbol {:?} is not in the header", head as char)))?;

            let values = tokens
                .map(|token| {
                    token
                        .parse::<i64>()
                        .ok()
                        .and_then(S::from)
                        .ok_or_else(|| invalid(format!("invalid score {token:?}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if values.len() != size {
                return Err(invalid(format!(
                    "row {:?} has {} scores, expected {size}",
                    head as char,
                    values.len()
                )));
            }

            let slots = &mut scores[row * size..(row + 1) * size];
            if slots.iter().any(Option::is_some) {
                return Err(invalid(format!("duplicated row {:?}", head as char)));
            }
            for (slot, value) in slots.iter_mut().zip(values) {
                *slot = Some(value);
            }
        }

        let scores = scores
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid("every header symbol must have a row".to_string()))?;
        Ok(Self::assemble("custom".to_string(), alphabet, scores))
    }
}

impl<S: Score> symbols::Scorer for SubstitutionMatrix<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        self.get(*s1, *s2)
    }
}

impl<S: Score> equiv::Classifier for SubstitutionMatrix<S> {
    type Symbol = u8;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> equiv::Type {
        if s1.eq_ignore_ascii_case(s2) {
            equiv::Type::Match
        } else if self.get(*s1, *s2) > S::zero() {
            equiv::Type::Equivalent
        } else {
            equiv::Type::Mismatch
        }
    }
}

/// BLOSUM62 amino acid substitution matrix.
pub fn blosum62<S: Score + From<i8>>() -> SubstitutionMatrix<S> {
    SubstitutionMatrix::embedded("BLOSUM62", BLOSUM62_ALPHABET, &BLOSUM62)
}

/// NUC.4.4 nucleotide substitution matrix with IUPAC ambiguity codes.
pub fn nuc44<S: Score + From<i8>>() -> SubstitutionMatrix<S> {
    SubstitutionMatrix::embedded("NUC.4.4", NUC44_ALPHABET, &NUC44)
}

const BLOSUM62_ALPHABET: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM62: [[i8; 24]; 24] = [
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4],
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4],
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4],
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4],
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4],
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4],
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4],
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4],
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4],
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4],
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4],
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4],
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4],
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4],
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4],
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4],
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4],
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4],
    [-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4],
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1],
];

const NUC44_ALPHABET: &[u8; 15] = b"ATGCSWRYKMBVHDN";

#[rustfmt::skip]
const NUC44: [[i8; 15]; 15] = [
    [ 5, -4, -4, -4, -4,  1,  1, -4, -4,  1, -4, -1, -1, -1, -2],
    [-4,  5, -4, -4, -4,  1, -4,  1,  1, -4, -1, -4, -1, -1, -2],
    [-4, -4,  5, -4,  1, -4,  1, -4,  1, -4, -1, -1, -4, -1, -2],
    [-4, -4, -4,  5,  1, -4, -4,  1, -4,  1, -1, -1, -1, -4, -2],
    [-4, -4,  1,  1, -1, -4, -2, -2, -2, -2, -1, -1, -3, -3, -1],
    [ 1,  1, -4, -4, -4, -1, -2, -2, -2, -2, -3, -3, -1, -1, -1],
    [ 1, -4,  1, -4, -2, -2, -1, -4, -2, -2, -3, -1, -3, -1, -1],
    [-4,  1, -4,  1, -2, -2, -4, -1, -2, -2, -1, -3, -1, -3, -1],
    [-4,  1,  1, -4, -2, -2, -2, -2, -1, -4, -1, -3, -3, -1, -1],
    [ 1, -4, -4,  1, -2, -2, -2, -2, -4, -1, -3, -1, -1, -3, -1],
    [-4, -1, -1, -1, -1, -3, -3, -1, -1, -3, -1, -2, -2, -2, -1],
    [-1, -4, -1, -1, -1, -3, -1, -3, -3, -1, -2, -1, -2, -2, -1],
    [-1, -1, -4, -1, -3, -1, -3, -1, -3, -1, -2, -2, -1, -2, -1],
    [-1, -1, -1, -4, -3, -1, -1, -3, -1, -3, -2, -2, -2, -1, -1],
    [-2, -2, -2, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];
