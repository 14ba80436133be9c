#![allow(dead_code)]

use std::sync::Once;

use recipe_core::{update, AppState, IngredientGroup, Msg, Recipe, RecipeStub};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

pub fn stubs() -> Vec<RecipeStub> {
    vec![
        RecipeStub::new("Apple Pie", "/recipes/apple-pie"),
        RecipeStub::new("Banana Bread", "/recipes/banana-bread"),
    ]
}

pub fn loaded(state: AppState, stubs: Vec<RecipeStub>) -> AppState {
    let (state, _) = update(state, Msg::CatalogRequested);
    let (mut state, _) = update(state, Msg::CatalogLoaded(Ok(stubs)));
    state.consume_dirty();
    state
}

pub fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        title: title.to_string(),
        canonical_url: "http://x".to_string(),
        author: "A".to_string(),
        ingredient_groups: vec![IngredientGroup {
            purpose: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }],
        instructions_list: vec!["Mix.".to_string(), "Bake.".to_string()],
        host: None,
        yields: None,
        total_time: None,
        category: None,
        nutrients: None,
    }
}

pub fn queue_titles(state: &AppState) -> Vec<String> {
    state
        .view()
        .queue
        .into_iter()
        .map(|entry| entry.title)
        .collect()
}
