use crate::{LoadError, Recipe, RecipeStub, RequestId, SearchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session start, or the user asked to reload the directory.
    CatalogRequested,
    /// Engine finished loading the directory.
    CatalogLoaded(Result<Vec<RecipeStub>, LoadError>),
    /// User selected a queue entry.
    StubSelected { url: String },
    /// Engine finished fetching a selected recipe.
    RecipeLoaded {
        request_id: RequestId,
        result: Result<Recipe, LoadError>,
    },
    /// User pressed Enter in the search input.
    SearchSubmitted(String),
    /// Engine fetched one recipe on behalf of an ingredient search.
    SearchInspected {
        search_id: SearchId,
        url: String,
        result: Result<Recipe, LoadError>,
    },
    /// Engine ran out of recipes to inspect for a search.
    SearchFinished { search_id: SearchId },
}
