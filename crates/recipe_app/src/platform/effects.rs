use std::sync::mpsc;
use std::thread;

use recipe_core::{Effect, LoadError, Msg};
use recipe_engine::{EngineEvent, EngineHandle};
use recipe_logging::{recipe_debug, recipe_info};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    recipe_info!("LoadCatalog");
                    self.engine.load_catalog();
                }
                Effect::FetchRecipe { request_id, url } => {
                    recipe_info!("FetchRecipe request_id={} url={}", request_id, url);
                    self.engine.fetch_recipe(request_id, url);
                }
                Effect::InspectRecipes { search_id, urls } => {
                    recipe_info!(
                        "InspectRecipes search_id={} round_trips={}",
                        search_id,
                        urls.len()
                    );
                    self.engine.inspect_recipes(search_id, urls);
                }
                Effect::CancelSearch { search_id } => {
                    recipe_info!("CancelSearch search_id={}", search_id);
                    self.engine.cancel_search(search_id);
                }
            }
        }
    }
}

/// Forwards engine events into the app's inbox until either side hangs up.
pub fn forward_engine_events(events: mpsc::Receiver<EngineEvent>, inbox: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if inbox.send(AppEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
    });
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded(result) => Msg::CatalogLoaded(result.map_err(LoadError::from)),
        EngineEvent::RecipeFetched { request_id, result } => Msg::RecipeLoaded {
            request_id,
            result: result.map_err(LoadError::from),
        },
        EngineEvent::SearchInspected {
            search_id,
            url,
            result,
        } => Msg::SearchInspected {
            search_id,
            url,
            result: result.map_err(LoadError::from),
        },
        EngineEvent::SearchFinished {
            search_id,
            cancelled,
        } => {
            if cancelled {
                recipe_debug!("Search {} stopped early", search_id);
            }
            Msg::SearchFinished { search_id }
        }
    }
}
