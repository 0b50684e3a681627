//! Expanded/collapsed state of the three facet sections.

use serde::{Deserialize, Serialize};

use crate::facet::FacetCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionState {
    #[serde(default = "expanded")]
    pub countries: bool,
    #[serde(default = "expanded")]
    pub asns: bool,
    #[serde(default = "expanded")]
    pub services: bool,
}

fn expanded() -> bool {
    true
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            countries: true,
            asns: true,
            services: true,
        }
    }
}

impl SectionState {
    pub fn is_expanded(&self, category: FacetCategory) -> bool {
        match category {
            FacetCategory::Country => self.countries,
            FacetCategory::Asn => self.asns,
            FacetCategory::Service => self.services,
        }
    }

    /// Flip one section; returns whether it is expanded afterwards.
    pub fn toggle_section(&mut self, category: FacetCategory) -> bool {
        let flag = match category {
            FacetCategory::Country => &mut self.countries,
            FacetCategory::Asn => &mut self.asns,
            FacetCategory::Service => &mut self.services,
        };
        *flag = !*flag;
        *flag
    }
}
