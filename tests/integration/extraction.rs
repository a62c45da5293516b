//! Coordinate extraction through a full scan

use crate::common::scan_fixture;
use vendor_alias::testing::IndexFixture;

#[test]
fn direct_fields_are_used_when_present() {
    let (_, lines) = scan_fixture(
        IndexFixture::new().text_doc(&[
            ("g", "org.apache.commons"),
            ("a", "lang3"),
            ("u", "org.apache.other|other-artifact|1.0|NA|jar"),
        ]),
    );
    assert_eq!(lines, vec!["org.apache.commons|lang3"]);
}

#[test]
fn composite_field_is_the_fallback() {
    let (_, lines) = scan_fixture(
        IndexFixture::new()
            .text_doc(&[("u", "org.springframework|spring-core|5.3.0|NA|jar")])
            .text_doc(&[("g", "org.osgi.core"), ("u", "org.osgi.core|osgi-core|6.0")]),
    );
    assert_eq!(
        lines,
        vec!["org.springframework|spring-core", "org.osgi.core|osgi-core"]
    );
}

#[test]
fn documents_without_coordinates_produce_nothing() {
    let (report, lines) = scan_fixture(
        IndexFixture::new()
            .text_doc(&[("descriptor", "NexusIndex"), ("IDXINFO", "1.0|central")])
            .text_doc(&[("allGroups", "allGroups"), ("allGroupsList", "org.apache|org.eclipse")])
            .text_doc(&[("g", "org.apache.maven")])
            .text_doc(&[("u", "org.apache.maven")]),
    );
    assert!(lines.is_empty());
    assert_eq!(report.scanned, 4);
    assert_eq!(report.matched, 0);
}
