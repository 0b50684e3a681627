//! Facet category enumeration and its fixed query keys.

use std::fmt;
use std::str::FromStr;

use crate::error::FacetError;

/// One of the three independent filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetCategory {
    Country,
    Asn,
    Service,
}

impl FacetCategory {
    /// All categories, in the order their parameters appear in a commit.
    pub const ALL: [FacetCategory; 3] = [
        FacetCategory::Country,
        FacetCategory::Asn,
        FacetCategory::Service,
    ];

    /// Query parameter key for this category.
    pub fn query_key(self) -> &'static str {
        match self {
            FacetCategory::Country => "countries",
            FacetCategory::Asn => "asns",
            FacetCategory::Service => "services",
        }
    }

    /// Section title shown above the facet list.
    pub fn title(self) -> &'static str {
        match self {
            FacetCategory::Country => "Country",
            FacetCategory::Asn => "ASN",
            FacetCategory::Service => "Service",
        }
    }

    /// Reverse of [`query_key`](Self::query_key).
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.query_key() == key)
    }
}

impl fmt::Display for FacetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

impl FromStr for FacetCategory {
    type Err = FacetError;

    /// Accepts singular or plural names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country" | "countries" => Ok(FacetCategory::Country),
            "asn" | "asns" => Ok(FacetCategory::Asn),
            "service" | "services" => Ok(FacetCategory::Service),
            _ => Err(FacetError::UnknownCategory(s.to_string())),
        }
    }
}

/// A `category:value` toggle, e.g. `country:US` or `asn:64512`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetToggle {
    pub category: FacetCategory,
    pub value: String,
}

impl FromStr for FacetToggle {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once(':')
            .ok_or_else(|| FacetError::InvalidToggle(s.to_string()))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(FacetError::InvalidToggle(s.to_string()));
        }
        Ok(Self {
            category: category.parse()?,
            value: value.to_string(),
        })
    }
}
