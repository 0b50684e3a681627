//! Facet rows and apply button derived from counts and controller state.

use crate::controller::FacetSelectionController;
use crate::facet::{canonical_asn, FacetCategory, FacetCounts};

use super::SectionState;

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRow {
    pub category: FacetCategory,
    /// Value as toggled and committed (ASNs in `AS<code>` form).
    pub value: String,
    pub label: String,
    pub count: u64,
    pub checked: bool,
}

/// One collapsible section. `rows` is empty while collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSection {
    pub category: FacetCategory,
    pub expanded: bool,
    pub rows: Vec<FacetRow>,
}

/// Apply button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyButton {
    /// No unsaved changes.
    Hidden,
    /// Changes pending, ready to apply.
    Ready,
    /// A commit is in flight; the button is shown disabled.
    Busy,
}

impl ApplyButton {
    pub fn for_controller(controller: &FacetSelectionController) -> Self {
        if !controller.is_dirty() {
            ApplyButton::Hidden
        } else if controller.is_commit_in_flight() {
            ApplyButton::Busy
        } else {
            ApplyButton::Ready
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            ApplyButton::Hidden => None,
            ApplyButton::Ready => Some("Apply Filters"),
            ApplyButton::Busy => Some("Applying Filters..."),
        }
    }
}

/// Whole filter panel, sections in country/ASN/service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetPanel {
    pub sections: Vec<FacetSection>,
    pub apply: ApplyButton,
    /// Overlay shown while a commit is in flight.
    pub busy: bool,
}

impl FacetPanel {
    /// Build rows in facet-count order. Selected values missing from `facets`
    /// get no row but stay selected.
    pub fn build(
        facets: &FacetCounts,
        controller: &FacetSelectionController,
        sections: &SectionState,
    ) -> Self {
        let sections = FacetCategory::ALL
            .into_iter()
            .map(|category| {
                let expanded = sections.is_expanded(category);
                let rows = if expanded {
                    rows_for(facets, controller, category)
                } else {
                    Vec::new()
                };
                FacetSection {
                    category,
                    expanded,
                    rows,
                }
            })
            .collect();
        Self {
            sections,
            apply: ApplyButton::for_controller(controller),
            busy: controller.is_commit_in_flight(),
        }
    }

    pub fn section(&self, category: FacetCategory) -> Option<&FacetSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

fn rows_for(
    facets: &FacetCounts,
    controller: &FacetSelectionController,
    category: FacetCategory,
) -> Vec<FacetRow> {
    let row = |value: String, label: &str, count: u64| FacetRow {
        checked: controller.is_selected(category, &value),
        category,
        value,
        label: label.to_string(),
        count,
    };
    match category {
        FacetCategory::Country => facets
            .countries
            .iter()
            .map(|c| row(c.code.clone(), c.name.as_str(), c.count))
            .collect(),
        FacetCategory::Asn => facets
            .asns
            .iter()
            .map(|a| row(canonical_asn(a.code), a.name.as_str(), a.count))
            .collect(),
        FacetCategory::Service => facets
            .services
            .iter()
            .map(|(name, count)| row(name.clone(), name.as_str(), *count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{AsnFacet, CountryFacet};
    use crate::navigation::Navigator;
    use crate::query::CommitRequest;
    use crate::selection::InitialSelection;

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn navigate(&self, _request: CommitRequest) {}
    }

    fn facets() -> FacetCounts {
        FacetCounts {
            countries: vec![
                CountryFacet {
                    code: "US".to_string(),
                    name: "United States".to_string(),
                    count: 120,
                },
                CountryFacet {
                    code: "DE".to_string(),
                    name: "Germany".to_string(),
                    count: 30,
                },
            ],
            asns: vec![AsnFacet {
                code: 13335,
                name: "CLOUDFLARENET".to_string(),
                count: 40,
            }],
            services: [("ssh".to_string(), 12), ("http".to_string(), 90)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn rows_reflect_selection_and_counts() {
        let initial = InitialSelection {
            asns: vec!["AS13335".to_string()],
            ..Default::default()
        };
        let mut ctl = FacetSelectionController::new(&initial);
        ctl.toggle(FacetCategory::Country, "DE");

        let panel = FacetPanel::build(&facets(), &ctl, &SectionState::default());
        let countries = &panel.section(FacetCategory::Country).unwrap().rows;
        assert_eq!(countries[0].value, "US");
        assert!(!countries[0].checked);
        assert!(countries[1].checked);
        assert_eq!(countries[1].label, "Germany");

        let asn = &panel.section(FacetCategory::Asn).unwrap().rows[0];
        assert_eq!(asn.value, "AS13335");
        assert_eq!(asn.label, "CLOUDFLARENET");
        assert!(asn.checked);

        let services: Vec<&str> = panel
            .section(FacetCategory::Service)
            .unwrap()
            .rows
            .iter()
            .map(|r| r.value.as_str())
            .collect();
        assert_eq!(services, vec!["http", "ssh"]);
    }

    #[test]
    fn collapsed_section_has_no_rows() {
        let ctl = FacetSelectionController::new(&InitialSelection::default());
        let mut sections = SectionState::default();
        sections.toggle_section(FacetCategory::Country);
        let panel = FacetPanel::build(&facets(), &ctl, &sections);
        let section = panel.section(FacetCategory::Country).unwrap();
        assert!(!section.expanded);
        assert!(section.rows.is_empty());
    }

    #[test]
    fn selected_value_missing_from_facets_stays_selected() {
        let initial = InitialSelection {
            countries: vec!["FR".to_string()],
            ..Default::default()
        };
        let ctl = FacetSelectionController::new(&initial);
        let panel = FacetPanel::build(&facets(), &ctl, &SectionState::default());
        let rows = &panel.section(FacetCategory::Country).unwrap().rows;
        assert!(rows.iter().all(|r| r.value != "FR"));
        assert!(ctl.is_selected(FacetCategory::Country, "FR"));
    }

    #[test]
    fn apply_button_follows_dirty_and_in_flight() {
        let mut ctl = FacetSelectionController::new(&InitialSelection::default());
        assert_eq!(ApplyButton::for_controller(&ctl), ApplyButton::Hidden);

        ctl.toggle(FacetCategory::Service, "ssh");
        assert_eq!(ApplyButton::for_controller(&ctl), ApplyButton::Ready);
        assert_eq!(ApplyButton::Ready.label(), Some("Apply Filters"));

        ctl.commit_with(&NullNavigator);
        let panel = FacetPanel::build(&facets(), &ctl, &SectionState::default());
        assert_eq!(panel.apply, ApplyButton::Busy);
        assert!(panel.busy);
        assert_eq!(ApplyButton::Busy.label(), Some("Applying Filters..."));
    }
}
