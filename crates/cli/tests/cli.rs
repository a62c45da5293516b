//! CLI contract tests for `index-dump` and `alias-gen`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use vendor_alias_index::testing::IndexFixture;

fn index_dump() -> assert_cmd::Command {
    cargo_bin_cmd!("index-dump")
}

fn alias_gen() -> assert_cmd::Command {
    cargo_bin_cmd!("alias-gen")
}

fn write_maven_index(dir: &Path) {
    IndexFixture::new()
        .text_doc(&[("descriptor", "NexusIndex")])
        .text_doc(&[("g", "org.apache.commons"), ("a", "lang3")])
        .text_doc(&[("g", "com.example.foo"), ("a", "bar")])
        .text_doc(&[("u", "org.eclipse.jetty|jetty-server|9.4.0|NA|jar")])
        .text_doc(&[("g", "io.gradle.plugin"), ("a", "core")])
        .write(dir)
        .expect("write fixture index");
}

// =========================================================================
// index-dump
// =========================================================================

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    index_dump()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Opening index").not());
}

#[test]
fn help_exits_0() {
    index_dump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INDEX_DIR"));
}

#[test]
fn dumps_matching_pairs_in_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_maven_index(tmp.path());

    index_dump()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("org.apache.commons|lang3\norg.eclipse.jetty|jetty-server\nio.gradle.plugin|core\n")
        .stderr(predicate::str::contains("Opening index at:"))
        .stderr(predicate::str::contains("Total documents to scan: 5"))
        .stderr(predicate::str::contains("--- DEBUG: Fields in Document 0 ---"))
        .stderr(predicate::str::contains("Name: descriptor | Value: NexusIndex"))
        .stderr(predicate::str::ends_with("Done.\n"));
}

#[test]
fn quiet_keeps_stderr_empty() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_maven_index(tmp.path());

    index_dump()
        .arg("--quiet")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("io.gradle.plugin|core"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_debug_dump_flag() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_maven_index(tmp.path());

    index_dump()
        .args(["--no-debug-dump"])
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn missing_index_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("central-lucene-index");

    index_dump()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Index not found"));
}

#[test]
fn directory_without_index_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");

    index_dump()
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open index"));
}

#[test]
fn zero_progress_interval_is_a_usage_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    write_maven_index(tmp.path());

    index_dump()
        .args(["--progress-every", "0"])
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

// =========================================================================
// alias-gen
// =========================================================================

#[test]
fn alias_gen_writes_sorted_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("eclipse_artifacts.txt");
    let output = tmp.path().join("vendor-alias.json");
    fs::write(
        &input,
        "org.eclipse.jetty|jetty-server\norg.apache.commons|lang3\norg.apache.maven|maven-core\n",
    )
    .expect("write input");

    alias_gen()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 aliases."))
        .stdout(predicate::str::contains("Written to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output")).expect("json");
    assert_eq!(json["jetty-server"], "org.eclipse.jetty");
    assert_eq!(json["maven-core"], "org.apache.maven");
    assert_eq!(json["spring.boot"], "org.springframework.boot");
    assert!(json.get("lang3").is_none());
}

#[test]
fn alias_gen_reads_stdin() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let output = tmp.path().join("aliases.json");

    alias_gen()
        .arg("-")
        .arg("--output")
        .arg(&output)
        .write_stdin("org.eclipse.platform|org-eclipse-ui\n")
        .assert()
        .success();

    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.contains("\"org-eclipse-ui\": \"org.eclipse.platform\""));
}

#[test]
fn alias_gen_missing_input_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");

    alias_gen()
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("eclipse_artifacts.txt"));
}

#[test]
fn dump_output_feeds_alias_gen() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let index_dir = tmp.path().join("index");
    fs::create_dir(&index_dir).expect("mkdir");
    write_maven_index(&index_dir);

    let dumped = index_dump()
        .arg("-q")
        .arg(&index_dir)
        .output()
        .expect("run index-dump");
    assert!(dumped.status.success());

    let output = tmp.path().join("vendor-alias.json");
    alias_gen()
        .arg("-")
        .arg("-o")
        .arg(&output)
        .write_stdin(dumped.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 aliases."));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read output")).expect("json");
    assert_eq!(json["jetty-server"], "org.eclipse.jetty");
}
