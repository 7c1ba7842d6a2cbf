use linalign_alignment_rs::pairwise::scoring::gaps::Costs;
use linalign_alignment_rs::pairwise::scoring::Scheme;

use super::{Score, Symbol};

const LOST: Score = Score::MIN / 4;

fn add(score: Score, delta: Score) -> Score {
    if score <= LOST { LOST } else { score + delta }
}

/// Textbook three-matrix global alignment score. Gaps open only after a paired column or at the
/// start of the alignment.
pub fn score<Sch: Scheme<Score = Score, Symbol = Symbol>>(
    query: &[Symbol],
    target: &[Symbol],
    scheme: &Sch,
) -> Score {
    let costs = Costs::of(scheme);
    let (rows, cols) = (query.len(), target.len());

    let mut diagonal = vec![vec![LOST; cols + 1]; rows + 1];
    let mut vertical = vec![vec![LOST; cols + 1]; rows + 1];
    let mut horizontal = vec![vec![LOST; cols + 1]; rows + 1];
    diagonal[0][0] = 0;

    for i in 0..=rows {
        for j in 0..=cols {
            if i > 0 && j > 0 {
                let best = diagonal[i - 1][j - 1]
                    .max(vertical[i - 1][j - 1])
                    .max(horizontal[i - 1][j - 1]);
                diagonal[i][j] = add(best, scheme.score(&query[i - 1], &target[j - 1]));
            }
            if i > 0 {
                vertical[i][j] = add(diagonal[i - 1][j], costs.target.open)
                    .max(add(vertical[i - 1][j], costs.target.extend));
            }
            if j > 0 {
                horizontal[i][j] = add(diagonal[i][j - 1], costs.query.open)
                    .max(add(horizontal[i][j - 1], costs.query.extend));
            }
        }
    }
    diagonal[rows][cols]
        .max(vertical[rows][cols])
        .max(horizontal[rows][cols])
}

#[test]
fn test_reference() {
    let scheme = super::simple(2, -3, -5, -1);
    assert_eq!(score(b"", b"", &scheme), 0);
    assert_eq!(score(b"ACGT", b"ACGT", &scheme), 8);
    assert_eq!(score(b"ACGT", b"", &scheme), -8);
    assert_eq!(score(b"AC", b"ACG", &scheme), -1);
    assert_eq!(score(b"AAAA", b"AA", &scheme), -2);
}
