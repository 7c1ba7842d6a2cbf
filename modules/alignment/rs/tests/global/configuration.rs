use std::sync::atomic::AtomicBool;

use eyre::{ensure, Result};

use linalign_alignment_rs::pairwise::global::{Anchor, Config, Error, GlobalAligner};

use super::{simple, Simple};

type Aligner<'a> = GlobalAligner<'a, &'a [u8], &'a [u8], Simple>;

fn field<T>(result: Result<T, Error>) -> Option<&'static str> {
    match result {
        Err(Error::Configuration { field, .. }) => Some(field),
        _ => None,
    }
}

#[test]
fn test_missing_inputs() -> Result<()> {
    let scheme = simple(1, -1, -2, -1);
    let (query, target) = (b"ACGT".as_slice(), b"AGT".as_slice());

    let missing = Aligner::builder().target(&target).scheme(&scheme).build();
    ensure!(field(missing) == Some("query"));

    let missing = Aligner::builder().query(&query).scheme(&scheme).build();
    ensure!(field(missing) == Some("target"));

    let missing = Aligner::builder().query(&query).target(&target).build();
    ensure!(field(missing) == Some("scheme"));

    let complete = Aligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .build();
    ensure!(complete.is_ok());
    Ok(())
}

#[test]
fn test_invalid_cuts() {
    let mut config = Config::new();
    assert_eq!(field(config.set_cuts_per_section(0)), Some("cuts_per_section"));
    assert_eq!(*config.cuts_per_section(), 1);
}

#[test]
fn test_invalid_anchors() -> Result<()> {
    let scheme = simple(1, -1, -2, -1);
    let (query, target) = (b"ACGT".as_slice(), b"AGT".as_slice());

    for anchors in [
        vec![Anchor::new(4, 0)],
        vec![Anchor::new(0, 3)],
        vec![Anchor::new(1, 1), Anchor::new(0, 2)],
        vec![Anchor::new(1, 1), Anchor::new(2, 1)],
        vec![Anchor::new(2, 2), Anchor::new(2, 2)],
    ] {
        let mut config = Config::new();
        config.set_anchors(anchors);
        let result = Aligner::builder()
            .query(&query)
            .target(&target)
            .scheme(&scheme)
            .config(config)
            .build();
        ensure!(field(result) == Some("anchors"));
    }

    ensure!(field(Anchor::from_query_map(&[-1, 0, -3])) == Some("anchors"));
    Ok(())
}

#[test]
fn test_cancelled() -> Result<()> {
    let scheme = simple(1, -1, -2, -1);
    let (query, target) = (b"ACGTACGTAC".as_slice(), b"AGTTACGA".as_slice());
    let flag = AtomicBool::new(true);

    let result = Aligner::builder()
        .query(&query)
        .target(&target)
        .scheme(&scheme)
        .cancellation(&flag)
        .build()?
        .align();
    ensure!(matches!(result, Err(Error::Cancelled)));
    Ok(())
}

#[test]
fn test_errors_convert_to_reports() {
    let report = eyre::Report::from(Error::configuration("anchors", "not increasing"));
    assert_eq!(report.to_string(), "invalid anchors: not increasing");
}
