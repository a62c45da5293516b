//! Scan output folded into an alias map

use crate::common::scan_fixture;
use vendor_alias::testing::IndexFixture;
use vendor_alias::AliasBuilder;

#[test]
fn scan_then_alias() {
    let (_, lines) = scan_fixture(
        IndexFixture::new()
            .text_doc(&[("g", "org.eclipse.jetty"), ("a", "jetty-server")])
            .text_doc(&[("g", "org.eclipse.jetty"), ("a", "jetty-server")])
            .text_doc(&[("g", "org.apache.commons"), ("a", "lang3")])
            .text_doc(&[("u", "org.eclipse.jdt|org-eclipse-jdt-core|3.0")])
            .text_doc(&[("g", "org.apache.maven"), ("a", "maven-test-tools")]),
    );

    let mut builder = AliasBuilder::new();
    for line in &lines {
        builder.ingest_line(line);
    }
    let (map, report) = builder.finish();

    assert_eq!(map.get("jetty-server"), Some("org.eclipse.jetty"));
    assert_eq!(map.get("org-eclipse-jdt-core"), Some("org.eclipse.jdt"));
    assert_eq!(map.get("lang3"), None);
    assert_eq!(map.get("maven-test-tools"), None);
    assert_eq!(map.len(), 3);

    assert_eq!(report.lines, 5);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.collisions, 1);
    assert_eq!(report.skipped, 2);
}
