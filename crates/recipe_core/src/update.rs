use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogRequested => state.begin_catalog_load(),
        Msg::CatalogLoaded(result) => state.apply_catalog(result),
        Msg::StubSelected { url } => state.select(url),
        Msg::RecipeLoaded { request_id, result } => {
            state.apply_recipe(request_id, result);
            Vec::new()
        }
        Msg::SearchSubmitted(keyword) => state.start_search(&keyword),
        Msg::SearchInspected {
            search_id,
            url,
            result,
        } => {
            state.apply_inspection(search_id, &url, result);
            Vec::new()
        }
        Msg::SearchFinished { search_id } => {
            state.finish_search(search_id);
            Vec::new()
        }
    };

    (state, effects)
}
