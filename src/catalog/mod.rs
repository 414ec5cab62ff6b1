//! Curated scenario catalog and its search/category filter.

mod data;

use std::collections::BTreeMap;

use serde::Serialize;

/// Category id that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDescriptor {
    pub id: &'static str,
    pub display_name_en: &'static str,
    pub display_name_local: &'static str,
    pub category_id: &'static str,
    pub icon_tag: &'static str,
    pub description: &'static str,
}

impl ScenarioDescriptor {
    /// Topic handed to the generation client when this scenario is picked.
    pub fn topic(&self) -> &'static str {
        self.display_name_en
    }

    /// English name and description are case-folded; the local name is
    /// matched as typed.
    pub fn matches_search(&self, needle: &str) -> bool {
        let folded = needle.to_lowercase();
        self.display_name_en.to_lowercase().contains(&folded)
            || self.display_name_local.contains(needle)
            || self.description.to_lowercase().contains(&folded)
    }

    pub fn in_category(&self, category_id: &str) -> bool {
        category_id == ALL_CATEGORIES || self.category_id == category_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

/// Result of a catalog search as the selection view needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: Vec<ScenarioDescriptor>,
    /// Trimmed search term, offered as a free-form topic while non-empty.
    pub custom_topic: Option<String>,
}

impl SearchOutcome {
    /// The "nothing in this category" hint only applies without a search term.
    pub fn show_empty_hint(&self) -> bool {
        self.matches.is_empty() && self.custom_topic.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    scenarios: &'static [ScenarioDescriptor],
    categories: &'static [CategoryDescriptor],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            scenarios: data::SCENARIOS,
            categories: data::CATEGORIES,
        }
    }

    pub const fn new(
        scenarios: &'static [ScenarioDescriptor],
        categories: &'static [CategoryDescriptor],
    ) -> Self {
        Self {
            scenarios,
            categories,
        }
    }

    pub fn scenarios(&self) -> &'static [ScenarioDescriptor] {
        self.scenarios
    }

    pub fn categories(&self) -> &'static [CategoryDescriptor] {
        self.categories
    }

    pub fn get(&self, id: &str) -> Option<&'static ScenarioDescriptor> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&'static CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Stable filter over the catalog. Blank search text and the
    /// [`ALL_CATEGORIES`] sentinel each disable their restriction.
    pub fn filter(&self, search_text: &str, category_id: &str) -> Vec<ScenarioDescriptor> {
        filter_scenarios(self.scenarios, search_text, category_id)
    }

    pub fn search(&self, search_text: &str, category_id: &str) -> SearchOutcome {
        let trimmed = search_text.trim();
        SearchOutcome {
            matches: self.filter(search_text, category_id),
            custom_topic: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn count_by_category(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for scenario in self.scenarios {
            *counts.entry(scenario.category_id).or_insert(0) += 1;
        }
        counts
    }
}

/// Same semantics as [`Catalog::filter`], usable on an already filtered slice.
pub fn filter_scenarios(
    scenarios: &[ScenarioDescriptor],
    search_text: &str,
    category_id: &str,
) -> Vec<ScenarioDescriptor> {
    let search_active = !search_text.trim().is_empty();

    scenarios
        .iter()
        .filter(|s| s.in_category(category_id))
        .filter(|s| !search_active || s.matches_search(search_text))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.scenarios().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.scenarios().len());
        assert_eq!(catalog.scenarios().len(), 232);
    }

    #[test]
    fn every_scenario_has_a_known_category() {
        let catalog = Catalog::builtin();
        for scenario in catalog.scenarios() {
            assert!(
                catalog.category(scenario.category_id).is_some(),
                "unknown category {} on {}",
                scenario.category_id,
                scenario.id
            );
        }
        assert_eq!(catalog.categories()[0].id, ALL_CATEGORIES);
    }

    #[test]
    fn english_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let upper = catalog.filter("AIRPORT", ALL_CATEGORIES);
        let lower = catalog.filter("airport", ALL_CATEGORIES);
        assert_eq!(upper, lower);
        assert!(upper.iter().any(|s| s.id == "airport_checkin"));
    }

    #[test]
    fn description_search_matches() {
        let catalog = Catalog::builtin();
        let result = catalog.filter("lattes", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "cafe");
    }

    #[test]
    fn local_name_search_finds_checkin() {
        let catalog = Catalog::builtin();
        let result = catalog.filter("机场值机", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "airport_checkin");
    }

    #[test]
    fn whitespace_search_is_ignored() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter("   ", "travel"), catalog.filter("", "travel"));
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter("", "no-such-category").is_empty());
    }

    #[test]
    fn search_offers_custom_topic_only_with_a_term() {
        let catalog = Catalog::builtin();

        let outcome = catalog.search("  Quantum Lab  ", ALL_CATEGORIES);
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.custom_topic.as_deref(), Some("Quantum Lab"));
        assert!(!outcome.show_empty_hint());

        let outcome = catalog.search("", "no-such-category");
        assert!(outcome.custom_topic.is_none());
        assert!(outcome.show_empty_hint());
    }

    #[test]
    fn counts_cover_whole_catalog() {
        let catalog = Catalog::builtin();
        let counts = catalog.count_by_category();
        assert_eq!(counts.values().sum::<usize>(), catalog.scenarios().len());
        assert_eq!(counts.get("travel"), Some(&13));
    }
}
