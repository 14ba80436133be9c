mod common;

use common::{init_logging, loaded, queue_titles, recipe, stubs};
use pretty_assertions::assert_eq;
use recipe_core::{update, AppState, Effect, LoadError, Msg, RecipeStub, SearchScope};

fn search(state: AppState, keyword: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::SearchSubmitted(keyword.to_string()))
}

#[test]
fn title_search_narrows_queue() {
    init_logging();
    let state = loaded(AppState::with_scope(SearchScope::TitleOnly), stubs());

    let (state, effects) = search(state, "apple");
    assert!(effects.is_empty());
    assert_eq!(queue_titles(&state), vec!["Apple Pie"]);

    let (state, _) = search(state, "bread");
    assert_eq!(queue_titles(&state), vec!["Banana Bread"]);

    let (state, _) = search(state, "zzz");
    assert!(queue_titles(&state).is_empty());
}

#[test]
fn keyword_case_is_ignored() {
    init_logging();
    let state = loaded(AppState::with_scope(SearchScope::TitleOnly), stubs());

    let (state, _) = search(state, "APPLE");
    assert_eq!(queue_titles(&state), vec!["Apple Pie"]);
    assert_eq!(state.view().search.unwrap().keyword, "apple");
}

#[test]
fn empty_search_resets_to_full_catalog() {
    init_logging();
    let state = loaded(AppState::with_scope(SearchScope::TitleOnly), stubs());
    let full = state.view().queue;

    let (state, _) = search(state, "zzz");
    let (state, effects) = search(state, "");

    assert!(effects.is_empty());
    assert_eq!(state.view().queue, full);
    assert!(state.view().search.is_none());

    // Resetting again changes nothing.
    let (again, _) = search(state.clone(), "");
    assert_eq!(again.view().queue, state.view().queue);
}

#[test]
fn search_never_mutates_catalog() {
    init_logging();
    let state = loaded(AppState::with_scope(SearchScope::TitleOnly), stubs());
    let catalog = state.catalog().clone();

    let (state, _) = search(state, "zzz");
    assert_eq!(state.catalog(), &catalog);
}

#[test]
fn ingredient_search_inspects_unmatched_stubs_in_order() {
    init_logging();
    let state = loaded(AppState::new(), stubs());

    let (state, effects) = search(state, "pie");
    assert_eq!(queue_titles(&state), vec!["Apple Pie"]);
    assert_eq!(
        effects,
        vec![Effect::InspectRecipes {
            search_id: 1,
            urls: vec!["/recipes/banana-bread".to_string()],
        }]
    );
    assert!(state.view().search.unwrap().in_progress);
}

#[test]
fn inspected_match_is_inserted_at_catalog_position() {
    init_logging();
    let catalog = vec![
        RecipeStub::new("Flatbread", "/recipes/flatbread"),
        RecipeStub::new("Walnut Cake", "/recipes/walnut"),
        RecipeStub::new("Walnut Loaf", "/recipes/loaf"),
    ];
    let state = loaded(AppState::new(), catalog);

    let (state, effects) = search(state, "walnut");
    assert_eq!(queue_titles(&state), vec!["Walnut Cake", "Walnut Loaf"]);
    assert_eq!(
        effects,
        vec![Effect::InspectRecipes {
            search_id: 1,
            urls: vec!["/recipes/flatbread".to_string()],
        }]
    );

    let (state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/flatbread".to_string(),
            result: Ok(recipe("Flatbread", &["Chopped WALNUTS", "flour"])),
        },
    );
    assert_eq!(
        queue_titles(&state),
        vec!["Flatbread", "Walnut Cake", "Walnut Loaf"]
    );

    let (state, _) = update(state, Msg::SearchFinished { search_id: 1 });
    let search_view = state.view().search.unwrap();
    assert!(!search_view.in_progress);
    assert_eq!(search_view.matches, 3);
    assert_eq!(search_view.pending, 0);
}

#[test]
fn failed_inspection_counts_as_non_match() {
    init_logging();
    let state = loaded(AppState::new(), stubs());

    let (state, _) = search(state, "sugar");
    let (state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/apple-pie".to_string(),
            result: Err(LoadError::network("timeout")),
        },
    );
    let (state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/banana-bread".to_string(),
            result: Ok(recipe("Banana Bread", &["1 cup sugar"])),
        },
    );

    assert_eq!(queue_titles(&state), vec!["Banana Bread"]);
    assert_eq!(state.view().search.unwrap().failed, 1);
}

#[test]
fn new_search_cancels_running_one_and_ignores_its_results() {
    init_logging();
    let state = loaded(AppState::new(), stubs());

    let (state, _) = search(state, "sugar");
    let (state, effects) = search(state, "flour");
    assert_eq!(effects[0], Effect::CancelSearch { search_id: 1 });
    assert!(matches!(
        effects[1],
        Effect::InspectRecipes { search_id: 2, .. }
    ));

    let before = state.clone();
    let (state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/apple-pie".to_string(),
            result: Ok(recipe("Apple Pie", &["sugar"])),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn empty_search_cancels_running_search() {
    init_logging();
    let state = loaded(AppState::new(), stubs());

    let (state, _) = search(state, "sugar");
    let (state, effects) = search(state, "");

    assert_eq!(effects, vec![Effect::CancelSearch { search_id: 1 }]);
    assert_eq!(queue_titles(&state), vec!["Apple Pie", "Banana Bread"]);
}

#[test]
fn viewed_recipes_feed_ingredient_search_without_refetch() {
    init_logging();
    let state = loaded(AppState::new(), stubs());

    let (state, effects) = update(
        state,
        Msg::StubSelected {
            url: "/recipes/banana-bread".to_string(),
        },
    );
    let request_id = match &effects[0] {
        Effect::FetchRecipe { request_id, .. } => *request_id,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::RecipeLoaded {
            request_id,
            result: Ok(recipe("Banana Bread", &["3 ripe bananas", "Flour"])),
        },
    );

    let (state, effects) = search(state, "flour");
    assert_eq!(queue_titles(&state), vec!["Banana Bread"]);
    assert_eq!(
        effects,
        vec![Effect::InspectRecipes {
            search_id: 1,
            urls: vec!["/recipes/apple-pie".to_string()],
        }]
    );
}

#[test]
fn search_typed_during_catalog_load_applies_to_loaded_catalog() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::CatalogRequested);
    let (state, effects) = search(state, "apple");
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::CatalogLoaded(Ok(stubs())));
    assert_eq!(queue_titles(&state), vec!["Apple Pie"]);
    assert_eq!(
        effects,
        vec![Effect::InspectRecipes {
            search_id: 2,
            urls: vec!["/recipes/banana-bread".to_string()],
        }]
    );
    let search_view = state.view().search.unwrap();
    assert_eq!(search_view.keyword, "apple");
    assert_eq!(search_view.matches, 1);
    assert!(search_view.in_progress);
}

#[test]
fn search_typed_during_reload_is_cancelled_and_rerun() {
    init_logging();
    let state = loaded(AppState::new(), stubs());
    let (state, _) = update(state, Msg::CatalogRequested);
    let (state, effects) = search(state, "tart");
    assert!(matches!(
        effects.as_slice(),
        [Effect::InspectRecipes { search_id: 1, .. }]
    ));

    let (state, effects) = update(
        state,
        Msg::CatalogLoaded(Ok(vec![
            RecipeStub::new("Cherry Tart", "/recipes/cherry"),
            RecipeStub::new("Plum Cake", "/recipes/plum"),
        ])),
    );
    assert_eq!(
        effects,
        vec![
            Effect::CancelSearch { search_id: 1 },
            Effect::InspectRecipes {
                search_id: 2,
                urls: vec!["/recipes/plum".to_string()],
            },
        ]
    );
    assert_eq!(queue_titles(&state), vec!["Cherry Tart"]);
}

#[test]
fn search_is_dropped_when_catalog_load_fails() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::CatalogRequested);
    let (state, _) = search(state, "apple");
    let (state, effects) = update(
        state,
        Msg::CatalogLoaded(Err(LoadError::network("http status 500"))),
    );

    assert!(effects.is_empty());
    assert!(state.view().search.is_none());
}

#[test]
fn non_matching_inspection_only_refreshes_search_status() {
    init_logging();
    let state = loaded(AppState::new(), stubs());
    let (mut state, _) = search(state, "walnut");
    assert!(state.consume_dirty());
    assert!(!state.consume_status_dirty());

    let (mut state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/apple-pie".to_string(),
            result: Ok(recipe("Apple Pie", &["apples"])),
        },
    );
    assert!(!state.consume_dirty());
    assert!(state.consume_status_dirty());

    let (mut state, _) = update(
        state,
        Msg::SearchInspected {
            search_id: 1,
            url: "/recipes/banana-bread".to_string(),
            result: Ok(recipe("Banana Bread", &["chopped walnuts"])),
        },
    );
    assert!(state.consume_dirty());
    assert!(!state.consume_status_dirty());

    let (mut state, _) = update(state, Msg::SearchFinished { search_id: 1 });
    assert!(!state.consume_dirty());
    assert!(state.consume_status_dirty());
    assert!(!state.is_busy());
}
