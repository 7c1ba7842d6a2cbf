use eyre::{ensure, Result};
use itertools::Itertools;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use linalign_alignment_rs::pairwise::global::{Anchor, Column, Config, GlobalAligner};
use linalign_alignment_rs::pairwise::scoring::{self, equiv, gaps, symbols, Scheme};

use super::{blosum62, reference, simple, Score, Symbol};

/// Different gap scores for the query and the target
#[derive(Clone, Copy)]
struct Lopsided;

impl gaps::Scorer for Lopsided {
    type Score = Score;

    fn seq1_gap_open(&self) -> Score {
        -3
    }
    fn seq1_gap_extend(&self) -> Score {
        -2
    }
    fn seq2_gap_open(&self) -> Score {
        -7
    }
    fn seq2_gap_extend(&self) -> Score {
        -1
    }
}

fn ensure_optimal<Sch>(query: &[u8], target: &[u8], scheme: &Sch, cuts: usize) -> Result<()>
where
    Sch: Scheme<Score = Score, Symbol = Symbol> + Sync,
{
    let mut config = Config::new();
    config.set_cuts_per_section(cuts)?;
    let aligned = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(scheme)
        .config(config)
        .build()?
        .align()?;

    let expected = reference::score(query, target, scheme);
    ensure!(
        aligned.score() == expected,
        "{:?} vs {:?} with {cuts} cuts: {} != {expected}",
        String::from_utf8_lossy(query),
        String::from_utf8_lossy(target),
        aligned.score()
    );
    ensure!(aligned.realized_score(scheme) == expected);

    // Every symbol is used exactly once and in order
    let pair = aligned.pair();
    ensure!(pair.query().len() == pair.target().len());
    ensure!(pair.query().replace('-', "").as_bytes() == query);
    ensure!(pair.target().replace('-', "").as_bytes() == target);
    ensure!(
        !pair
            .query()
            .chars()
            .zip(pair.target().chars())
            .any(|(q, t)| q == '-' && t == '-')
    );
    Ok(())
}

fn words(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut result = vec![vec![]];
    for len in 1..=max_len {
        result.extend(
            (0..len)
                .map(|_| alphabet.iter().copied())
                .multi_cartesian_product(),
        );
    }
    result
}

#[test]
fn test_exhaustive_small_alphabet() -> Result<()> {
    let words = words(b"AC", 4);
    assert_eq!(words.len(), 31);

    let linear = simple(1, -1, -2, -2);
    let affine = simple(2, -3, -5, -1);
    let lopsided = scoring::compose(
        symbols::Equality::new(3, -2),
        Lopsided,
        equiv::Equality::new(),
    );

    for (query, target) in words.iter().cartesian_product(&words) {
        for cuts in [1, 2, 3] {
            ensure_optimal(query, target, &linear, cuts)?;
            ensure_optimal(query, target, &affine, cuts)?;
            ensure_optimal(query, target, &lopsided, cuts)?;
        }
    }
    Ok(())
}

fn mutate(rng: &mut ChaCha8Rng, seq: &[u8], alphabet: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(seq.len() + 8);
    for symbol in seq {
        match rng.gen_range(0..10) {
            0 => {}
            1 => result.push(alphabet[rng.gen_range(0..alphabet.len())]),
            2 => {
                result.push(*symbol);
                for _ in 0..rng.gen_range(1..4) {
                    result.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            _ => result.push(*symbol),
        }
    }
    result
}

#[test]
fn test_random_sequences() -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(20_240_611);
    let dna = b"ACGT";
    let protein = b"ARNDCQEGHILKMFPSTWYV";

    let affine = simple(2, -3, -5, -1);
    let matrix = blosum62(10, 1);

    for _ in 0..60 {
        let len = rng.gen_range(0..80);
        let query = (0..len)
            .map(|_| dna[rng.gen_range(0..dna.len())])
            .collect::<Vec<_>>();
        let target = mutate(&mut rng, &query, dna);
        for cuts in [1, 2, 7] {
            ensure_optimal(&query, &target, &affine, cuts)?;
        }

        let len = rng.gen_range(0..60);
        let query = (0..len)
            .map(|_| protein[rng.gen_range(0..protein.len())])
            .collect::<Vec<_>>();
        let target = mutate(&mut rng, &query, protein);
        for cuts in [1, 4] {
            ensure_optimal(&query, &target, &matrix, cuts)?;
            ensure_optimal(&target, &query, &matrix, cuts)?;
        }
    }
    Ok(())
}

/// Anchored optimum: independent segments between anchors plus the forced anchor columns
fn anchored_score<Sch>(query: &[u8], target: &[u8], anchors: &[Anchor], scheme: &Sch) -> Score
where
    Sch: Scheme<Score = Score, Symbol = Symbol>,
{
    let (mut qstart, mut tstart, mut total) = (0, 0, 0);
    for anchor in anchors {
        total += reference::score(
            &query[qstart..anchor.query],
            &target[tstart..anchor.target],
            scheme,
        );
        total += scheme.score(&query[anchor.query], &target[anchor.target]);
        (qstart, tstart) = (anchor.query + 1, anchor.target + 1);
    }
    total + reference::score(&query[qstart..], &target[tstart..], scheme)
}

#[test]
fn test_random_anchors() -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(7_041_993);
    let dna = b"ACGT";
    let scheme = simple(2, -3, -5, -1);

    for _ in 0..50 {
        let len = rng.gen_range(1..60);
        let query = (0..len)
            .map(|_| dna[rng.gen_range(0..dna.len())])
            .collect::<Vec<_>>();
        let target = mutate(&mut rng, &query, dna);

        let count = rng.gen_range(0..=query.len().min(target.len()).min(5));
        let mut qpos = index::sample(&mut rng, query.len(), count).into_vec();
        let mut tpos = index::sample(&mut rng, target.len(), count).into_vec();
        qpos.sort_unstable();
        tpos.sort_unstable();
        let anchors = qpos
            .into_iter()
            .zip(tpos)
            .map(|(query, target)| Anchor::new(query, target))
            .collect::<Vec<_>>();

        let expected = anchored_score(&query, &target, &anchors, &scheme);
        for cuts in [1, 3] {
            let mut config = Config::new();
            config.set_cuts_per_section(cuts)?.set_anchors(anchors.clone());
            let aligned = GlobalAligner::builder()
                .query(&query)
                .target(&target)
                .scheme(&scheme)
                .config(config)
                .build()?
                .align()?;

            ensure!(
                aligned.score() == expected,
                "{:?} vs {:?} anchored at {anchors:?}: {} != {expected}",
                String::from_utf8_lossy(&query),
                String::from_utf8_lossy(&target),
                aligned.score()
            );
            ensure!(aligned.realized_score(&scheme) == expected);
            for anchor in &anchors {
                ensure!(aligned.columns().contains(&Column::Pair {
                    query: anchor.query,
                    target: anchor.target
                }));
            }
        }
    }
    Ok(())
}

#[test]
fn test_unrelated_sequences() -> Result<()> {
    let affine = simple(2, -3, -5, -1);
    ensure_optimal(b"AAAAAAAAAAAAAAAA", b"CCC", &affine, 1)?;
    ensure_optimal(b"CCC", b"AAAAAAAAAAAAAAAA", &affine, 5)?;
    ensure_optimal(b"ACGTACGTACGT", b"", &affine, 1)?;
    ensure_optimal(b"", b"ACGTACGTACGT", &affine, 2)?;
    Ok(())
}

#[test]
fn test_self_alignment() -> Result<()> {
    let scheme = blosum62(10, 1);
    let seq = b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ".as_slice();
    for cuts in [1, 3] {
        let mut config = Config::new();
        config.set_cuts_per_section(cuts)?;
        let aligned = GlobalAligner::builder()
            .query(&seq)
            .target(&seq)
            .scheme(&scheme)
            .config(config)
            .build()?
            .align()?;

        ensure!(aligned.score() == aligned.max_score());
        ensure!(!aligned.pair().query().contains('-'));
        ensure!(aligned.num_identical() == seq.len());
        ensure!(aligned.similarity() == 1.0);
        ensure!(aligned.distance() == 0.0);
    }
    Ok(())
}
