//! Facet counts as returned by the data API.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::FacetError;

/// One country facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFacet {
    pub code: String,
    pub name: String,
    pub count: u64,
}

/// One ASN facet value, keyed by bare numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnFacet {
    pub code: u32,
    pub name: String,
    pub count: u64,
}

/// Read-only facet counts for the current result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    #[serde(default)]
    pub countries: Vec<CountryFacet>,
    #[serde(default)]
    pub asns: Vec<AsnFacet>,
    /// Service name -> count. Missing or `null` in the payload means no services.
    #[serde(default, deserialize_with = "services_or_empty")]
    pub services: BTreeMap<String, u64>,
}

fn services_or_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, u64>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FacetCounts {
    /// Parse the data API's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, FacetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load facet counts from a JSON file (e.g. a saved API response).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read facet counts: {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parse facet counts: {}", path.display()))
    }
}
