use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mindz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mindz").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn add_then_show_renders_the_tree() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["add", "root", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added topic (1): Plan"));

    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Topic"))
        .stdout(predicate::str::contains("└── Plan"));
}

#[test]
fn bare_invocation_defaults_to_show() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Topic"));
}

#[test]
fn flat_listing_uses_outline_positions() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["add", "root", "Plan"])
        .assert()
        .success();
    mindz(temp_dir.path())
        .args(["add", "1", "Draft"])
        .assert()
        .success();

    mindz(temp_dir.path())
        .args(["show", "--flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1"))
        .stdout(predicate::str::contains("Draft"));
}

#[test]
fn rename_updates_the_label() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["add", "root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Topic"));

    mindz(temp_dir.path())
        .args(["mv", "1", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Topic -> Plan"));

    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan"));
}

#[test]
fn deleting_the_root_is_suppressed_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["add", "root", "Keep me"])
        .assert()
        .success();

    mindz(temp_dir.path())
        .args(["rm", "root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root topic cannot be deleted"));

    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"));
}

#[test]
fn empty_rename_reverts() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["add", "root", "Original"])
        .assert()
        .success();

    mindz(temp_dir.path())
        .args(["mv", "1", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Empty text"));

    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original"));
}

// The walkthrough from the docs: grow a branch, rename it, nest under
// it, then remove it wholesale.
#[test]
fn full_editing_walkthrough() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path()).args(["add", "root"]).assert().success();
    mindz(temp_dir.path())
        .args(["mv", "1", "Plan"])
        .assert()
        .success();
    mindz(temp_dir.path()).args(["add", "1"]).assert().success();

    mindz(temp_dir.path())
        .args(["show", "--flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1"));

    mindz(temp_dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 sub-topics"));

    mindz(temp_dir.path())
        .args(["show", "--flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan").not())
        .stdout(predicate::str::contains("Main Topic"));
}

#[test]
fn corrupt_map_falls_back_and_doctor_salvages() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store_dir = temp_dir.path().join(".mindz");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("map.json"), "{ definitely not json").unwrap();

    // Reading never crashes on bad data.
    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Topic"));

    mindz(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("backed it up"));

    // The corrupt document was kept as a backup.
    let backups = fs::read_dir(&store_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("map.json.corrupt-")
        })
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn export_then_import_round_trips() {
    let source = tempfile::tempdir().unwrap();
    mindz(source.path())
        .args(["add", "root", "Plan"])
        .assert()
        .success();
    mindz(source.path())
        .args(["add", "1", "Draft"])
        .assert()
        .success();

    mindz(source.path())
        .args(["export", "map.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to map.md"));
    let exported = source.path().join("map.md");
    assert!(exported.exists());

    let target = tempfile::tempdir().unwrap();
    mindz(target.path())
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 topic(s)"));

    mindz(target.path())
        .args(["show", "--flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan"))
        .stdout(predicate::str::contains("Draft"));
}

#[test]
fn import_refuses_to_clobber_without_force() {
    let temp_dir = tempfile::tempdir().unwrap();
    mindz(temp_dir.path())
        .args(["add", "root", "Precious"])
        .assert()
        .success();

    let outline = temp_dir.path().join("in.md");
    fs::write(&outline, "# Other\n\n- Replacement\n").unwrap();

    mindz(temp_dir.path())
        .args(["import", outline.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    mindz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Precious"));
}

#[test]
fn init_and_path_point_at_the_map_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized mind map"));
    assert!(temp_dir.path().join(".mindz/map.json").exists());

    mindz(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("map.json"));
}

#[test]
fn config_new_text_feeds_add() {
    let temp_dir = tempfile::tempdir().unwrap();

    mindz(temp_dir.path())
        .args(["config", "new-text", "Idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new-text = Idea"));

    mindz(temp_dir.path())
        .args(["add", "root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added topic (1): Idea"));
}
