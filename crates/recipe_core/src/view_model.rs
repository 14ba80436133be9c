use crate::{Recipe, SelectCommand};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub catalog: CatalogStatusView,
    pub queue: Vec<QueueEntryView>,
    pub search: Option<SearchView>,
    pub detail: DetailView,
    pub dirty: bool,
}

impl AppViewModel {
    /// Looks up a queue entry by its 1-based display position.
    pub fn entry_at(&self, position: usize) -> Option<&QueueEntryView> {
        position
            .checked_sub(1)
            .and_then(|idx| self.queue.get(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatusView {
    #[default]
    Idle,
    Loading,
    Ready {
        count: usize,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntryView {
    pub position: usize,
    pub id: String,
    pub title: String,
    pub command: SelectCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub keyword: String,
    pub matches: usize,
    pub pending: usize,
    pub failed: usize,
    pub in_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Empty,
    Loading {
        url: String,
    },
    Failed {
        url: String,
        message: String,
    },
    Recipe(RecipeView),
}

/// Display regions of a selected recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub title: String,
    pub source: SourceView,
    pub ingredient_sections: Vec<IngredientSectionView>,
    pub directions: Vec<String>,
    /// Label/value pairs for the optional metadata that was present.
    pub facts: Vec<(String, String)>,
    pub nutrients: Vec<(String, String)>,
}

/// Attribution link: `author` as text, pointing at `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    pub href: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSectionView {
    pub heading: Option<String>,
    pub items: Vec<String>,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        let ingredient_sections = recipe
            .ingredient_groups
            .iter()
            .map(|group| IngredientSectionView {
                heading: group.purpose.clone().filter(|purpose| !purpose.is_empty()),
                items: group.ingredients.clone(),
            })
            .collect();

        let mut facts = Vec::new();
        if let Some(host) = &recipe.host {
            facts.push(("Site".to_string(), host.clone()));
        }
        if let Some(yields) = &recipe.yields {
            facts.push(("Yields".to_string(), yields.clone()));
        }
        if let Some(minutes) = recipe.total_time {
            facts.push(("Total time".to_string(), format!("{minutes} minutes")));
        }
        if let Some(category) = &recipe.category {
            facts.push(("Category".to_string(), category.clone()));
        }

        let nutrients = recipe
            .nutrients
            .iter()
            .flatten()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Self {
            title: recipe.title.clone(),
            source: SourceView {
                href: recipe.canonical_url.clone(),
                author: recipe.author.clone(),
            },
            ingredient_sections,
            directions: recipe.instructions_list.clone(),
            facts,
            nutrients,
        }
    }
}
