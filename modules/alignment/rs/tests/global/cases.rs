use eyre::{ensure, Result};

use linalign_alignment_rs::pairwise::global::{Anchor, Column, Config, GlobalAligner};
use linalign_alignment_rs::pairwise::scoring::Scheme;

use super::{blosum62, nuc44, Score, Symbol};

struct Workload<'a> {
    query: &'a [u8],
    target: &'a [u8],
    score: Score,
    max_score: Score,
    min_score: Score,
    pair: &'a str,
}

fn ensure_workload<Sch>(scheme: &Sch, w: Workload<'_>) -> Result<()>
where
    Sch: Scheme<Score = Score, Symbol = Symbol> + Sync,
{
    let aligned = GlobalAligner::new(&w.query, &w.target, scheme)?.align()?;

    ensure!(aligned.score() == w.score, "score: {} != {}", aligned.score(), w.score);
    ensure!(aligned.max_score() == w.max_score);
    ensure!(aligned.min_score() == w.min_score);
    ensure!(aligned.pair().to_string() == w.pair, "pair: {}", aligned.pair());
    ensure!(aligned.profile().to_string() == w.pair);
    ensure!(aligned.computation_time_nanos() >= 1);
    Ok(())
}

#[test]
fn test_protein_alignment() -> Result<()> {
    let scheme = blosum62(10, 1);
    ensure_workload(
        &scheme,
        Workload {
            query: b"ARND",
            target: b"RDG",
            score: -6,
            max_score: 21,
            min_score: -27,
            pair: "ARND\n-RDG\n",
        },
    )?;
    ensure_workload(
        &scheme,
        Workload {
            query: b"ARND",
            target: b"ARND",
            score: 21,
            max_score: 21,
            min_score: -28,
            pair: "ARND\nARND\n",
        },
    )
}

#[test]
fn test_length_asymmetry() -> Result<()> {
    let scheme = nuc44(5, 2);
    for (query, target, pair) in [
        (b"A".as_slice(), b"AT".as_slice(), "A-\nAT\n"),
        (b"AT".as_slice(), b"A".as_slice(), "AT\nA-\n"),
    ] {
        let aligned = GlobalAligner::new(&query, &target, &scheme)?.align()?;
        ensure!(aligned.pair().to_string() == pair, "{}", aligned.pair());
        ensure!(aligned.score() == -2);
    }
    Ok(())
}

#[test]
fn test_multiple_cuts() -> Result<()> {
    let scheme = nuc44(5, 2);
    let (query, target) = (b"AA".as_slice(), b"AATT".as_slice());

    let bisected = GlobalAligner::new(&query, &target, &scheme)?.align()?;

    let mut config = Config::new();
    config.set_cuts_per_section(2)?;
    let cut = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .config(config)
        .build()?
        .align()?;

    ensure!(cut.score() == bisected.score());
    ensure!(cut.pair().to_string() == "AA--\nAATT\n", "{}", cut.pair());
    ensure!(cut.alignment().rle() == "2=2v");
    Ok(())
}

#[test]
fn test_anchored_alignment() -> Result<()> {
    let scheme = nuc44(5, 2);
    let (query, target) = (b"ACGTAACCGGTT".as_slice(), b"AACGTAACCGGTTACGTACGT".as_slice());

    let mut map = vec![-1; query.len()];
    map[0] = 1;

    let mut config = Config::new();
    config
        .set_cuts_per_section(1000)?
        .set_anchors(Anchor::from_query_map(&map)?);
    let aligned = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .config(config)
        .build()?
        .align()?;

    ensure!(aligned.columns().contains(&Column::Pair { query: 0, target: 0 }));
    ensure!(aligned.query_span() == Some(1..=13), "{:?}", aligned.query_span());
    ensure!(aligned.query_in_target() == Some(0..13));
    ensure!(aligned.target_span() == Some(1..=21));
    ensure!(
        aligned.pair().to_string() == "A-CGTAACCGGTT--------\nAACGTAACCGGTTACGTACGT\n",
        "{}",
        aligned.pair()
    );
    ensure!(aligned.score() == aligned.realized_score(&scheme));
    // Anchor, one skipped target symbol, 11 matches, trailing target tail of 8
    ensure!(aligned.score() == 5 - 7 + 11 * 5 - 7 - 7 * 2);
    Ok(())
}

#[test]
fn test_anchor_far_from_the_optimum() -> Result<()> {
    let scheme = nuc44(5, 2);
    let (query, target) = (b"ACGT".as_slice(), b"ACGT".as_slice());

    let free = GlobalAligner::new(&query, &target, &scheme)?.align()?;
    ensure!(free.pair().to_string() == "ACGT\nACGT\n");

    let mut config = Config::new();
    config.set_anchors(vec![Anchor::new(0, 3)]);
    let anchored = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .config(config)
        .build()?
        .align()?;

    ensure!(anchored.columns().contains(&Column::Pair { query: 0, target: 3 }));
    ensure!(anchored.pair().to_string() == "---ACGT\nACGT---\n", "{}", anchored.pair());
    ensure!(anchored.score() < free.score());
    ensure!(anchored.score() == anchored.realized_score(&scheme));
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let scheme = blosum62(10, 1);
    let (query, target) = (
        b"MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVV".as_slice(),
        b"MKTAYIAKQRQISFVKSHFSRQDILDLWIYHTQGYFPDWQNYTPGPGVRYPLTFGWCYKLVPV".as_slice(),
    );

    let mut config = Config::new();
    config.set_cuts_per_section(3)?.set_threads(2);
    let aligner = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .config(config)
        .build()?;

    let first = aligner.align()?;
    for _ in 0..3 {
        let next = aligner.align()?;
        ensure!(next.score() == first.score());
        ensure!(next.columns() == first.columns());
        ensure!(next.computation_time_nanos() >= 1);
    }

    let single = GlobalAligner::new(&query, &target, &scheme)?.align()?;
    ensure!(single.score() == first.score());
    Ok(())
}

#[test]
fn test_builder_matches_constructor() -> Result<()> {
    let scheme = blosum62(10, 1);
    let (query, target) = (b"HEAGAWGHEE".as_slice(), b"PAWHEAE".as_slice());

    let constructed = GlobalAligner::new(&query, &target, &scheme)?.align()?;
    let built = GlobalAligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .config(Config::default())
        .build()?
        .align()?;

    ensure!(constructed.score() == built.score());
    ensure!(constructed.columns() == built.columns());
    ensure!(constructed.pair() == built.pair());
    Ok(())
}
