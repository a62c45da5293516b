//! Allowlist filtering through a full scan

use crate::common::scan_fixture;
use vendor_alias::testing::IndexFixture;
use vendor_alias::{DEFAULT_PREFIXES, DEFAULT_SUBSTRINGS};

#[test]
fn reference_cases() {
    let (report, lines) = scan_fixture(
        IndexFixture::new()
            .text_doc(&[("g", "org.apache.commons"), ("a", "lang3")])
            .text_doc(&[("g", "com.example.foo"), ("a", "foo")])
            .text_doc(&[("g", "io.gradle.plugin"), ("a", "core")]),
    );
    assert_eq!(lines, vec!["org.apache.commons|lang3", "io.gradle.plugin|core"]);
    assert_eq!(report.matched, 2);
}

#[test]
fn every_default_rule_admits_a_group() {
    let mut fixture = IndexFixture::new();
    let mut expected = Vec::new();

    for prefix in DEFAULT_PREFIXES {
        let group = format!("{prefix}x");
        fixture = fixture.text_doc(&[("g", group.as_str()), ("a", "p")]);
        expected.push(format!("{group}|p"));
    }
    for needle in DEFAULT_SUBSTRINGS {
        let group = format!("io.{needle}.x");
        fixture = fixture.text_doc(&[("g", group.as_str()), ("a", "s")]);
        expected.push(format!("{group}|s"));
    }

    let (_, lines) = scan_fixture(fixture);
    assert_eq!(lines, expected);
}

#[test]
fn output_count_matches_predicate_and_keeps_order() {
    let groups = [
        "com.google.guava",
        "org.w3c.dom",
        "net.sf.jopt",
        "org.scala-lang.modules",
        "com.lihaoyi",
        "io.netty",
        "org.checkerframework",
        "org.w3c.dom",
    ];
    let mut fixture = IndexFixture::new();
    for (i, group) in groups.iter().enumerate() {
        let artifact = format!("artifact-{i}");
        fixture = fixture.text_doc(&[("g", *group), ("a", artifact.as_str())]);
    }

    let (report, lines) = scan_fixture(fixture);
    assert_eq!(
        lines,
        vec![
            "org.w3c.dom|artifact-1",
            "org.scala-lang.modules|artifact-3",
            "com.lihaoyi|artifact-4",
            "org.checkerframework|artifact-6",
            "org.w3c.dom|artifact-7",
        ]
    );
    assert_eq!(report.matched as usize, lines.len());
    assert_eq!(report.total, groups.len() as u64);
}
