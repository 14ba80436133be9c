use crate::view_model::{
    AppViewModel, CatalogStatusView, DetailView, QueueEntryView, RecipeView, SearchView,
};
use crate::{
    ActiveSearch, Catalog, Effect, IngredientIndex, LoadError, Queue, Recipe, RecipeStub,
    SearchId, SearchPlan, SearchScope,
};

/// Generation of a detail-view fetch. Only the latest one may update the view.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(LoadError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Empty,
    Loading {
        request_id: RequestId,
        url: String,
    },
    Loaded {
        url: String,
        recipe: Recipe,
    },
    Failed {
        url: String,
        error: LoadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Catalog,
    catalog_status: CatalogStatus,
    queue: Queue,
    index: IngredientIndex,
    scope: SearchScope,
    search: Option<ActiveSearch>,
    last_search_id: SearchId,
    detail: DetailState,
    last_request_id: RequestId,
    dirty: bool,
    /// Only the search status line changed since the last redraw.
    status_dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(scope: SearchScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog_status
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn active_search(&self) -> Option<&ActiveSearch> {
        self.search.as_ref()
    }

    pub fn ingredient_index(&self) -> &IngredientIndex {
        &self.index
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn view(&self) -> AppViewModel {
        let catalog = match &self.catalog_status {
            CatalogStatus::Idle => CatalogStatusView::Idle,
            CatalogStatus::Loading => CatalogStatusView::Loading,
            CatalogStatus::Ready => CatalogStatusView::Ready {
                count: self.catalog.len(),
            },
            CatalogStatus::Failed(err) => CatalogStatusView::Failed {
                message: err.to_string(),
            },
        };

        let queue = self
            .queue
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| QueueEntryView {
                position: idx + 1,
                id: entry.id.clone(),
                title: entry.title.clone(),
                command: entry.command.clone(),
            })
            .collect();

        let search = self.search.as_ref().map(|search| SearchView {
            keyword: search.keyword.clone(),
            matches: search.matched.len(),
            pending: search.pending.len(),
            failed: search.failed,
            in_progress: !search.finished,
        });

        let detail = match &self.detail {
            DetailState::Empty => DetailView::Empty,
            DetailState::Loading { url, .. } => DetailView::Loading { url: url.clone() },
            DetailState::Loaded { recipe, .. } => DetailView::Recipe(RecipeView::from(recipe)),
            DetailState::Failed { url, error } => DetailView::Failed {
                url: url.clone(),
                message: error.to_string(),
            },
        };

        AppViewModel {
            catalog,
            queue,
            search,
            detail,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn mark_status_dirty(&mut self) {
        self.status_dirty = true;
    }

    /// True when the queue or detail panel changed and the screen needs a full redraw.
    pub fn consume_dirty(&mut self) -> bool {
        let dirty = std::mem::take(&mut self.dirty);
        if dirty {
            self.status_dirty = false;
        }
        dirty
    }

    /// True when only the search status changed since the last redraw.
    pub fn consume_status_dirty(&mut self) -> bool {
        std::mem::take(&mut self.status_dirty)
    }

    /// Whether a catalog load, recipe fetch, or ingredient search is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.catalog_status == CatalogStatus::Loading
            || matches!(self.detail, DetailState::Loading { .. })
            || self.search.as_ref().is_some_and(|search| !search.finished)
    }

    /// Drops the running search, returning the cancel effect if it was still fetching.
    fn abandon_search(&mut self) -> Option<Effect> {
        let search = self.search.take()?;
        (!search.finished).then_some(Effect::CancelSearch {
            search_id: search.id,
        })
    }

    pub(crate) fn begin_catalog_load(&mut self) -> Vec<Effect> {
        if self.catalog_status == CatalogStatus::Loading {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(2);
        effects.extend(self.abandon_search());
        self.catalog_status = CatalogStatus::Loading;
        self.mark_dirty();
        effects.push(Effect::LoadCatalog);
        effects
    }

    /// A search submitted while the catalog was loading is re-run against the new catalog.
    pub(crate) fn apply_catalog(&mut self, result: Result<Vec<RecipeStub>, LoadError>) -> Vec<Effect> {
        if self.catalog_status != CatalogStatus::Loading {
            return Vec::new();
        }
        let keyword = self.search.as_ref().map(|search| search.keyword.clone());
        let mut effects: Vec<Effect> = self.abandon_search().into_iter().collect();
        self.mark_dirty();
        match result {
            Ok(stubs) => {
                self.catalog = Catalog::new(stubs);
                self.index.clear();
                self.catalog_status = CatalogStatus::Ready;
                self.queue.render_all(&self.catalog);
                if let Some(keyword) = keyword {
                    effects.extend(self.start_search(&keyword));
                }
            }
            Err(err) => {
                self.catalog = Catalog::default();
                self.catalog_status = CatalogStatus::Failed(err);
                self.queue.clear();
            }
        }
        effects
    }

    pub(crate) fn select(&mut self, url: String) -> Vec<Effect> {
        if !self.catalog.contains_url(&url) {
            return Vec::new();
        }
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.detail = DetailState::Loading {
            request_id,
            url: url.clone(),
        };
        self.mark_dirty();
        vec![Effect::FetchRecipe { request_id, url }]
    }

    pub(crate) fn apply_recipe(&mut self, request_id: RequestId, result: Result<Recipe, LoadError>) {
        let url = match &self.detail {
            DetailState::Loading {
                request_id: current,
                url,
            } if *current == request_id => url.clone(),
            _ => return,
        };
        self.detail = match result {
            Ok(recipe) => {
                self.index.record(&url, &recipe);
                DetailState::Loaded { url, recipe }
            }
            Err(error) => DetailState::Failed { url, error },
        };
        self.mark_dirty();
    }

    pub(crate) fn start_search(&mut self, raw: &str) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        effects.extend(self.abandon_search());

        let keyword = crate::normalize_keyword(raw);
        self.mark_dirty();
        if keyword.is_empty() {
            self.queue.render_all(&self.catalog);
            return effects;
        }

        self.last_search_id += 1;
        let search_id = self.last_search_id;
        let plan = SearchPlan::build(&self.catalog, &self.index, &keyword, self.scope);
        let urls = plan.inspect_urls();
        let search = ActiveSearch::from_plan(search_id, keyword, plan);
        self.queue
            .render(&self.catalog, search.matched.iter().copied());
        self.search = Some(search);

        if !urls.is_empty() {
            effects.push(Effect::InspectRecipes { search_id, urls });
        }
        effects
    }

    pub(crate) fn apply_inspection(
        &mut self,
        search_id: SearchId,
        url: &str,
        result: Result<Recipe, LoadError>,
    ) {
        let Some(search) = self.search.as_mut().filter(|s| s.id == search_id) else {
            return;
        };
        let positions = search.resolve(url);
        if positions.is_empty() {
            return;
        }
        match result {
            Ok(recipe) => {
                self.index.record(url, &recipe);
                let matches = self
                    .index
                    .get(url)
                    .is_some_and(|lines| crate::ingredients_match(&search.keyword, lines));
                if matches {
                    search.matched.extend(positions);
                    self.queue
                        .render(&self.catalog, search.matched.iter().copied());
                    self.mark_dirty();
                    return;
                }
            }
            Err(_) => {
                search.failed += positions.len();
            }
        }
        self.mark_status_dirty();
    }

    pub(crate) fn finish_search(&mut self, search_id: SearchId) {
        if let Some(search) = self.search.as_mut().filter(|s| s.id == search_id) {
            search.finished = true;
            self.mark_status_dirty();
        }
    }
}
