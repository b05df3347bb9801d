use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    fs::write(&wordlist, "hello\nworld\nhe\nquietly\nsaid\ncat\nhat\nbat\n").unwrap();
    (dir, wordlist)
}

fn wordcheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wordcheck").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("WORDCHECK_WORDLIST")
        .arg("--no-color");
    cmd
}

#[test]
fn clean_text_passes() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--text", "Hello, world!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
}

#[test]
fn problems_fail_with_report() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--text", "He(quietly)said helo!"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:3 spacing ( missing space"))
        .stdout(predicate::str::contains("1:11 spacing ) missing space"))
        .stdout(predicate::str::contains("spelling helo unknown word"))
        .stdout(predicate::str::contains("→ hello"))
        .stdout(predicate::str::contains("1 spelling, 2 spacing"));
}

#[test]
fn no_fail_exits_zero() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--no-fail", "--text", "zat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ bat, cat, hat"));
}

#[test]
fn json_output() {
    let (dir, wordlist) = setup();
    let output = wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--format", "json", "--text", "helo world"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], "<text>");
    assert_eq!(value["issues"][0]["text"], "helo");
    assert_eq!(value["issues"][0]["suggestions"][0], "hello");
}

#[test]
fn show_with_json_keeps_stdout_parseable() {
    let (dir, wordlist) = setup();
    let output = wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--show", "--format", "json", "--text", "helo world"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["issues"][0]["text"], "helo");
    assert!(String::from_utf8_lossy(&output.stderr).contains("helo world"));
}

#[test]
fn reads_stdin() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .write_stdin("hello world.\n")
        .assert()
        .success();
}

#[test]
fn checks_directories() {
    let (dir, wordlist) = setup();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("a.txt"), "hello world").unwrap();
    fs::write(docs.join("b.txt"), "hello wrld").unwrap();

    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .arg(&docs)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("a.txt").not())
        .stdout(predicate::str::contains("found in 2 inputs"));
}

#[test]
fn missing_file_is_an_error() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .arg("nope.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn missing_wordlist_is_fatal() {
    let (dir, _) = setup();
    wordcheck(&dir)
        .args(["--wordlist", "absent.txt", "--text", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dictionary"));
}

#[test]
fn fix_rewrites_file() {
    let (dir, wordlist) = setup();
    let file = dir.path().join("note.txt");
    fs::write(&file, "helo wrld, he said.").unwrap();

    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .arg("--fix")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 corrections applied"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "hello world, he said.");
}

#[test]
fn fix_text_prints_result() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&wordlist)
        .args(["--fix", "--text", "Helo there"])
        .assert()
        .success()
        .stdout("hello there");
}

#[test]
fn dict_build_and_info() {
    let (dir, wordlist) = setup();
    wordcheck(&dir)
        .args(["dict", "build"])
        .arg(&wordlist)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 8 words"));

    let compiled = dir.path().join("words.dict");
    assert!(compiled.exists());

    wordcheck(&dir)
        .args(["dict", "info"])
        .arg(&compiled)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 8"))
        .stdout(predicate::str::contains("FST"));

    wordcheck(&dir)
        .arg("--wordlist")
        .arg(&compiled)
        .args(["--text", "hello world"])
        .assert()
        .success();
}
