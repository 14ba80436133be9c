use crate::{RequestId, SearchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and parse the recipe directory.
    LoadCatalog,
    /// Fetch one recipe for the detail view. Supersedes any earlier request.
    FetchRecipe { request_id: RequestId, url: String },
    /// Fetch each recipe in turn, one round-trip per url, for ingredient matching.
    InspectRecipes {
        search_id: SearchId,
        urls: Vec<String>,
    },
    /// Stop issuing inspection fetches for a superseded search.
    CancelSearch { search_id: SearchId },
}
