//! ASN canonicalization.
//!
//! Facet counts key ASNs by bare number; selections and commit payloads use
//! `"AS<number>"`. Every value entering an ASN selection goes through
//! [`canonicalize_asn_value`] so membership checks always see one form.

/// Canonical string form for a numeric ASN.
pub fn canonical_asn(code: u32) -> String {
    format!("AS{code}")
}

/// Numeric code of a canonical (or bare numeric) ASN string.
///
/// Accepts `"AS64512"`, `"as64512"` and `"64512"`. Returns `None` for
/// anything else.
pub fn asn_code(value: &str) -> Option<u32> {
    let digits = match value.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("AS") => &value[2..],
        _ => value,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Maps an ASN selection value to its canonical form.
///
/// Values that are not recognisable ASNs pass through unchanged; the
/// controller does not reject unknown facet values.
pub fn canonicalize_asn_value(value: &str) -> String {
    match asn_code(value) {
        Some(code) => canonical_asn(code),
        None => value.to_string(),
    }
}
