//! Tests for apply.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use facetctl_core::facet::FacetCategory;

#[test]
fn cli_parse_apply_defaults() {
    match parse(&["facetctl", "apply"]) {
        CliCommand::Apply {
            url,
            toggles,
            insertion_order,
        } => {
            assert!(url.is_none());
            assert!(toggles.is_empty());
            assert!(!insertion_order);
        }
        _ => panic!("expected Apply"),
    }
}

#[test]
fn cli_parse_apply_repeated_toggles() {
    match parse(&[
        "facetctl",
        "apply",
        "--url",
        "https://rigour.example/hosts?countries=US",
        "--toggle",
        "country:DE",
        "--toggle",
        "asn:64512",
        "--insertion-order",
    ]) {
        CliCommand::Apply {
            url,
            toggles,
            insertion_order,
        } => {
            assert_eq!(url.as_deref(), Some("https://rigour.example/hosts?countries=US"));
            assert_eq!(toggles.len(), 2);
            assert_eq!(toggles[0].category, FacetCategory::Country);
            assert_eq!(toggles[0].value, "DE");
            assert_eq!(toggles[1].category, FacetCategory::Asn);
            assert_eq!(toggles[1].value, "64512");
            assert!(insertion_order);
        }
        _ => panic!("expected Apply"),
    }
}

#[test]
fn cli_parse_apply_rejects_bad_toggle() {
    assert!(Cli::try_parse_from(["facetctl", "apply", "--toggle", "port:22"]).is_err());
    assert!(Cli::try_parse_from(["facetctl", "apply", "--toggle", "country"]).is_err());
}
