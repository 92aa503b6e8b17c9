use assert_cmd::Command;
use predicates::prelude::*;

const USAGE: &str = "Usage: plot-histogram <csv_path> [<csv2_path>] [<csv3_path>] ... \n";

#[test]
fn no_arguments_prints_usage() {
    Command::cargo_bin("plot-histogram")
        .unwrap()
        .assert()
        .success()
        .stdout(USAGE);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.csv");

    Command::cargo_bin("plot-histogram")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nowhere.csv"));
}

#[test]
fn malformed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.csv");
    let bad = dir.path().join("bad.csv");
    std::fs::write(&good, "# a.png\n# Format\n20, 1, 2, 3\n").unwrap();
    std::fs::write(&bad, "# b.png\n# Format\nfifty, 1, 2, 3\n").unwrap();

    Command::cargo_bin("plot-histogram")
        .unwrap()
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.csv"))
        .stderr(predicate::str::contains("bin count 'fifty' is not an integer"));
}

#[test]
fn sample_generator_writes_producer_format() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("generate_sample")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("5 histogram files"));

    let forest = std::fs::read_to_string(dir.path().join("forest.csv")).unwrap();
    let mut lines = forest.lines();
    assert_eq!(lines.next(), Some("# images/forest.png"));
    assert_eq!(
        lines.next(),
        Some("# Format: number of bins followed by bin frequencies")
    );
    let row: Vec<&str> = lines.next().unwrap().split(", ").collect();
    assert_eq!(row[0], "50");
    assert_eq!(row.len(), 51);

    let pair = std::fs::read_to_string(dir.path().join("forest_pair.csv")).unwrap();
    assert_eq!(pair.lines().count(), 4);
}
