use assert_cmd::Command;
use predicates::prelude::*;

fn geolog(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("geolog").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn add_then_list_shows_the_sample_with_placeholders() {
    let temp_dir = tempfile::tempdir().unwrap();

    geolog(temp_dir.path())
        .args(["add", "--sample-number", "S-001"])
        .args(["--latitude", "-34.6", "--longitude", "-58.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample recorded: S-001"));

    geolog(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("S-001"))
        .stdout(predicate::str::contains("-34.6"))
        .stdout(predicate::str::contains("---"));
}

#[test]
fn add_with_lone_coordinate_fails_and_stores_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    geolog(temp_dir.path())
        .args(["add", "--latitude", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provided together"));

    geolog(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No samples recorded."));
}

#[test]
fn clear_requires_confirmation_and_declining_keeps_data() {
    let temp_dir = tempfile::tempdir().unwrap();

    geolog(temp_dir.path())
        .args(["add", "--sample-number", "S-001"])
        .assert()
        .success();

    // Declined prompt: nothing happens.
    geolog(temp_dir.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));
    geolog(temp_dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("S-001"));

    // --yes skips the prompt.
    geolog(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All samples removed."));
    geolog(temp_dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No samples recorded."));
}

#[test]
fn export_then_import_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("out.csv");

    geolog(temp_dir.path())
        .args(["add", "--sample-number", "S-001", "--collector", "Darwin"])
        .assert()
        .success();

    geolog(temp_dir.path())
        .arg("export")
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 sample(s)."));

    let text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(text.starts_with("id,sampleNumber,"));
    assert!(text.contains("\"Darwin\""));

    let other_dir = tempfile::tempdir().unwrap();
    geolog(other_dir.path())
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 sample(s)."));
    geolog(other_dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Darwin"));
}

#[test]
fn export_of_empty_collection_writes_no_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("out.csv");

    geolog(temp_dir.path())
        .arg("export")
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No samples to export."));
    assert!(!csv_path.exists());
}

#[test]
fn map_prefers_coordinates_over_place_names() {
    let temp_dir = tempfile::tempdir().unwrap();

    geolog(temp_dir.path())
        .args(["add", "--sample-number", "S-001"])
        .args(["--locality", "Buenos Aires", "--country", "Argentina"])
        .args(["--latitude", "-34.6", "--longitude", "-58.4"])
        .assert()
        .success();

    // Grab the short id from the listing.
    let output = geolog(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find(|l| l.contains("S-001"))
        .unwrap()
        .split_whitespace()
        .next()
        .unwrap()
        .to_string();

    geolog(temp_dir.path())
        .arg("map")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://www.google.com/maps?q=-34.6,-58.4",
        ));
}
