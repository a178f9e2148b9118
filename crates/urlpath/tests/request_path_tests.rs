//! Integration tests for urlpath
//!
//! Tests are organized by property:
//! - Round-trip fidelity (raw value reconstruction from elements)
//! - Split completeness (prefix + remainder == full, in value and count)
//! - Empty-prefix identity
//! - Matrix parameter extraction
//! - Percent-decoding (strict, per encoding)
//! - Boundary and alignment faults
//! - Sub-path idempotence

use pretty_assertions::assert_eq;
use rstest::rstest;
use urlpath::{Element, Encoding, PathContainer, PathError, RequestPath, SplitError};

#[rstest]
#[case("")]
#[case("/")]
#[case("//")]
#[case("/a/b/c")]
#[case("a/b")]
#[case("/a//b///c/")]
#[case("/a;x=1;y=2,3/b;flag")]
#[case("/hello%20world/caf%C3%A9")]
#[case(";a=b")]
fn parse_round_trips_the_raw_value(#[case] raw: &str) {
    let path = PathContainer::parse(raw).unwrap();
    assert_eq!(path.value(), raw);

    // The same invariant, rebuilt from the elements themselves.
    let rebuilt = path.sub_path(0, path.elements().len());
    assert_eq!(rebuilt.value(), raw);
}

#[test]
fn empty_path_is_a_valid_terminal_result() {
    let path = PathContainer::parse("").unwrap();
    assert_eq!(path.value(), "");
    assert_eq!(path.elements().len(), 0);
}

#[test]
fn separators_are_never_collapsed() {
    let path = PathContainer::parse("//docs//intro").unwrap();
    let kinds: Vec<bool> = path.elements().iter().map(Element::is_separator).collect();
    assert_eq!(kinds, [true, true, false, true, true, false]);
}

#[test]
fn matrix_parameters_are_extracted_per_segment() {
    let path = PathContainer::parse("/a;x=1;y=2;y=3/b").unwrap();

    let segments: Vec<_> = path
        .elements()
        .iter()
        .filter_map(|element| match element {
            Element::Segment(segment) => Some(segment),
            Element::Separator => None,
        })
        .collect();
    assert_eq!(segments.len(), 2);

    let a = segments[0];
    assert_eq!(a.value(), "a");
    assert_eq!(a.parameter("x").unwrap().values(), ["1"]);
    assert_eq!(a.parameter("y").unwrap().values(), ["2", "3"]);

    let b = segments[1];
    assert_eq!(b.value(), "b");
    assert!(b.parameters().is_empty());
}

#[test]
fn percent_decoding_preserves_the_raw_text() {
    let path = PathContainer::parse("/hello%20world").unwrap();

    let Element::Segment(segment) = &path.elements()[1] else {
        panic!("expected a segment");
    };
    assert_eq!(segment.value(), "hello world");
    assert_eq!(segment.raw(), "hello%20world");
}

#[rstest]
#[case("/a%2")]
#[case("/a%zz")]
#[case("/%")]
fn malformed_escapes_fail_the_parse(#[case] raw: &str) {
    assert!(PathContainer::parse(raw).is_err());
}

#[test]
fn latin1_decoding_accepts_bytes_utf8_rejects() {
    assert!(PathContainer::parse("/caf%E9").is_err());

    let path = PathContainer::parse_with("/caf%E9", Encoding::Latin1).unwrap();
    assert_eq!(path.elements()[1].value(), "café");
}

#[rstest]
#[case("/a/b/c", "/a")]
#[case("/a/b/c", "/a/b")]
#[case("/app;v=2/data/x", "/app;v=2")]
#[case("/one%20two/three", "/one%20two")]
fn split_is_complete_in_value_and_element_count(#[case] raw: &str, #[case] prefix: &str) {
    let path = RequestPath::parse(raw, Some(prefix)).unwrap();

    let mut reassembled = path.prefix().value().to_string();
    reassembled.push_str(path.remainder().value());
    assert_eq!(reassembled, path.value());

    assert_eq!(
        path.prefix().elements().len() + path.remainder().elements().len(),
        path.full().elements().len()
    );
    assert_eq!(path.prefix().value(), prefix);
}

#[test]
fn remainder_elements_are_the_full_paths_trailing_elements() {
    let path = RequestPath::parse("/a/b/c", Some("/a")).unwrap();
    let skip = path.prefix().elements().len();
    assert_eq!(path.remainder().elements(), &path.elements()[skip..]);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("/"))]
fn empty_prefix_is_the_identity_split(#[case] prefix: Option<&str>) {
    let path = RequestPath::parse("/a/b", prefix).unwrap();
    assert!(path.prefix().is_empty());
    assert_eq!(path.prefix().value(), "");
    assert_eq!(path.remainder(), path.full());
    assert_eq!(path.remainder().value(), "/a/b");
}

#[test]
fn non_prefixing_mount_prefix_is_a_configuration_fault() {
    let err = RequestPath::parse("/application/x", Some("/api")).unwrap_err();
    assert_eq!(
        err,
        PathError::Split(SplitError::InvalidMountPrefix {
            prefix: "/api".to_string(),
            path: "/application/x".to_string(),
        })
    );
}

#[test]
fn mid_segment_mount_prefix_is_an_alignment_fault() {
    let err = RequestPath::parse("/application/x", Some("/app")).unwrap_err();
    assert_eq!(
        err,
        PathError::Split(SplitError::MisalignedMountPrefix {
            prefix: "/app".to_string(),
            path: "/application/x".to_string(),
        })
    );
}

#[test]
fn sub_path_is_idempotent() {
    let path = PathContainer::parse("/a;x=1/b//c").unwrap();
    for n in 0..=path.elements().len() {
        let once = path.sub_path(0, n);
        assert_eq!(once.sub_path(0, n), once);
    }
}

#[test]
fn containers_from_equal_element_sequences_are_equal() {
    let full = PathContainer::parse("/a/b").unwrap();
    let copy = PathContainer::parse("/a/b").unwrap();
    assert_eq!(full, copy);

    // A sub-path that covers everything is the same container.
    assert_eq!(full.sub_path(0, full.elements().len()), full);
}

#[test]
fn request_path_equality_covers_all_three_views() {
    let a = RequestPath::parse("/app/x", Some("/app")).unwrap();
    let b = RequestPath::parse("/app/x", Some("/app")).unwrap();
    let c = RequestPath::parse("/app/x", None).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c); // same full path, different split
}

#[test]
fn forwarding_rebases_the_same_full_path() {
    let path = RequestPath::parse("/app/admin/users", Some("/app")).unwrap();
    assert_eq!(path.remainder().value(), "/admin/users");

    let forwarded = path.with_mount_prefix(Some("/app/admin")).unwrap();
    assert_eq!(forwarded.full(), path.full());
    assert_eq!(forwarded.prefix().value(), "/app/admin");
    assert_eq!(forwarded.remainder().value(), "/users");
}

#[test]
fn display_is_a_three_part_summary() {
    let path = RequestPath::parse("/app/x", Some("/app")).unwrap();
    assert_eq!(
        format!("{path}"),
        "RequestPath[full='/app/x', prefix='/app', remainder='/x']"
    );
}
