use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::{Catalog, CatalogIndex, Recipe};

pub type SearchId = u64;

/// Which parts of a recipe a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    TitleOnly,
    /// Titles first; stubs whose title misses are matched on their ingredients,
    /// fetching the recipe on demand when it has not been seen yet.
    #[default]
    TitleAndIngredients,
}

/// Lower-cases the keyword. Whitespace is significant and kept.
pub fn normalize_keyword(raw: &str) -> String {
    raw.to_lowercase()
}

/// `keyword` must already be normalized.
pub fn title_matches(keyword: &str, title: &str) -> bool {
    title.to_lowercase().contains(keyword)
}

/// `keyword` and `ingredients` must already be lower-cased.
pub fn ingredients_match(keyword: &str, ingredients: &[String]) -> bool {
    ingredients.iter().any(|line| line.contains(keyword))
}

/// Lower-cased ingredient lines of every recipe fetched this session, by stub url.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientIndex {
    by_url: HashMap<String, Vec<String>>,
}

impl IngredientIndex {
    pub fn record(&mut self, url: &str, recipe: &Recipe) {
        let lines = recipe.ingredients().map(str::to_lowercase).collect();
        self.by_url.insert(url.to_string(), lines);
    }

    pub fn get(&self, url: &str) -> Option<&[String]> {
        self.by_url.get(url).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_url.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_url.clear();
    }
}

/// Outcome of matching a keyword against what is known locally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPlan {
    pub matched: BTreeSet<CatalogIndex>,
    /// Stubs that can only be decided by fetching their recipe, in catalog order.
    pub to_inspect: BTreeMap<CatalogIndex, String>,
}

impl SearchPlan {
    pub fn build(
        catalog: &Catalog,
        index: &IngredientIndex,
        keyword: &str,
        scope: SearchScope,
    ) -> Self {
        let mut plan = SearchPlan::default();
        for (position, stub) in catalog.stubs().iter().enumerate() {
            if title_matches(keyword, &stub.title) {
                plan.matched.insert(position);
                continue;
            }
            if scope == SearchScope::TitleOnly {
                continue;
            }
            match index.get(&stub.url) {
                Some(lines) => {
                    if ingredients_match(keyword, lines) {
                        plan.matched.insert(position);
                    }
                }
                None => {
                    plan.to_inspect.insert(position, stub.url.clone());
                }
            }
        }
        plan
    }

    /// Distinct urls to fetch, in catalog order.
    pub fn inspect_urls(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.to_inspect
            .values()
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect()
    }
}

/// A keyword search whose on-demand ingredient fetches may still be running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSearch {
    pub id: SearchId,
    pub keyword: String,
    pub matched: BTreeSet<CatalogIndex>,
    pub pending: BTreeMap<CatalogIndex, String>,
    pub failed: usize,
    pub finished: bool,
}

impl ActiveSearch {
    pub fn from_plan(id: SearchId, keyword: String, plan: SearchPlan) -> Self {
        let finished = plan.to_inspect.is_empty();
        Self {
            id,
            keyword,
            matched: plan.matched,
            pending: plan.to_inspect,
            failed: 0,
            finished,
        }
    }

    /// Removes and returns the pending catalog positions that point at `url`.
    pub fn resolve(&mut self, url: &str) -> Vec<CatalogIndex> {
        let positions: Vec<CatalogIndex> = self
            .pending
            .iter()
            .filter(|(_, pending_url)| pending_url.as_str() == url)
            .map(|(position, _)| *position)
            .collect();
        for position in &positions {
            self.pending.remove(position);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IngredientGroup, RecipeStub};

    fn recipe_with(ingredients: &[&str]) -> Recipe {
        Recipe {
            title: "Any".into(),
            canonical_url: "http://x".into(),
            author: "A".into(),
            ingredient_groups: vec![IngredientGroup {
                purpose: None,
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            }],
            instructions_list: Vec::new(),
            host: None,
            yields: None,
            total_time: None,
            category: None,
            nutrients: None,
        }
    }

    #[test]
    fn keyword_keeps_surrounding_whitespace() {
        assert_eq!(normalize_keyword(" Pie "), " pie ");
        assert!(!title_matches(" pie ", "Apple Pie"));
        assert!(title_matches("pie", "Apple PIE"));
    }

    #[test]
    fn ingredient_case_is_folded_when_recorded() {
        let mut index = IngredientIndex::default();
        index.record("/recipes/a", &recipe_with(&["2 cups FLOUR"]));
        let lines = index.get("/recipes/a").unwrap();
        assert!(ingredients_match("flour", lines));
    }

    #[test]
    fn plan_inspects_only_unknown_non_title_matches() {
        let catalog = Catalog::new(vec![
            RecipeStub::new("Apple Pie", "/recipes/apple"),
            RecipeStub::new("Banana Bread", "/recipes/banana"),
            RecipeStub::new("Cherry Tart", "/recipes/cherry"),
        ]);
        let mut index = IngredientIndex::default();
        index.record("/recipes/banana", &recipe_with(&["apple sauce"]));

        let plan = SearchPlan::build(&catalog, &index, "apple", SearchScope::TitleAndIngredients);
        assert_eq!(plan.matched.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(plan.inspect_urls(), vec!["/recipes/cherry".to_string()]);

        let title_only = SearchPlan::build(&catalog, &index, "apple", SearchScope::TitleOnly);
        assert_eq!(title_only.matched.iter().copied().collect::<Vec<_>>(), vec![0]);
        assert!(title_only.to_inspect.is_empty());
    }

    #[test]
    fn duplicate_urls_are_fetched_once_and_resolved_together() {
        let catalog = Catalog::new(vec![
            RecipeStub::new("One", "/recipes/same"),
            RecipeStub::new("Two", "/recipes/same"),
        ]);
        let plan = SearchPlan::build(
            &catalog,
            &IngredientIndex::default(),
            "salt",
            SearchScope::TitleAndIngredients,
        );
        assert_eq!(plan.inspect_urls().len(), 1);

        let mut active = ActiveSearch::from_plan(1, "salt".into(), plan);
        assert!(!active.finished);
        assert_eq!(active.resolve("/recipes/same"), vec![0, 1]);
        assert!(active.pending.is_empty());
    }
}
