//! Recipe viewer core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod msg;
mod queue;
mod search;
mod state;
mod types;
mod update;
mod view_model;

pub use catalog::{Catalog, CatalogIndex};
pub use effect::Effect;
pub use msg::Msg;
pub use queue::{Queue, QueueEntry, SelectCommand};
pub use search::{
    ingredients_match, normalize_keyword, title_matches, ActiveSearch, IngredientIndex,
    SearchId, SearchPlan, SearchScope,
};
pub use state::{AppState, CatalogStatus, DetailState, RequestId};
pub use types::{IngredientGroup, LoadError, LoadErrorKind, Recipe, RecipeStub};
pub use update::update;
pub use view_model::{
    AppViewModel, CatalogStatusView, DetailView, IngredientSectionView, QueueEntryView,
    RecipeView, SearchView, SourceView,
};
