use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use recipe_core::{RequestId, SearchId};
use recipe_logging::{recipe_debug, recipe_info, recipe_warn};
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, FailureKind, FetchError, RecipeClient};

enum EngineCommand {
    LoadCatalog,
    FetchRecipe { request_id: RequestId, url: String },
    InspectRecipes { search_id: SearchId, urls: Vec<String> },
    CancelSearch { search_id: SearchId },
}

/// Handle to the background thread that runs network work on a tokio runtime.
///
/// Dropping every handle stops the thread and aborts in-flight work.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(client: RecipeClient) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let client = Arc::new(client);

        thread::Builder::new()
            .name("recipe-engine".to_string())
            .spawn(move || {
                let mut dispatcher = Dispatcher::new(client, event_tx);
                while let Ok(command) = cmd_rx.recv() {
                    dispatcher.dispatch(&runtime, command);
                }
                recipe_debug!("Engine command channel closed; shutting down");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn load_catalog(&self) {
        self.send(EngineCommand::LoadCatalog);
    }

    /// Fetches a recipe for the detail view, aborting the previous selection fetch.
    pub fn fetch_recipe(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::FetchRecipe {
            request_id,
            url: url.into(),
        });
    }

    /// Fetches each url in order, one at a time, aborting any previous inspection.
    pub fn inspect_recipes(&self, search_id: SearchId, urls: Vec<String>) {
        self.send(EngineCommand::InspectRecipes { search_id, urls });
    }

    pub fn cancel_search(&self, search_id: SearchId) {
        self.send(EngineCommand::CancelSearch { search_id });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            recipe_warn!("Engine thread is gone; command dropped");
        }
    }
}

struct Dispatcher {
    client: Arc<RecipeClient>,
    event_tx: mpsc::Sender<EngineEvent>,
    selection: Option<CancellationToken>,
    search: Option<(SearchId, CancellationToken)>,
}

impl Dispatcher {
    fn new(client: Arc<RecipeClient>, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            client,
            event_tx,
            selection: None,
            search: None,
        }
    }

    fn dispatch(&mut self, runtime: &tokio::runtime::Runtime, command: EngineCommand) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        match command {
            EngineCommand::LoadCatalog => {
                runtime.spawn(async move {
                    let result = client.load_catalog().await;
                    if let Err(err) = &result {
                        recipe_warn!("Catalog load failed: {}", err);
                    }
                    let _ = event_tx.send(EngineEvent::CatalogLoaded(result));
                });
            }
            EngineCommand::FetchRecipe { request_id, url } => {
                if let Some(previous) = self.selection.take() {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                self.selection = Some(token.clone());
                runtime.spawn(async move {
                    let result = tokio::select! {
                        biased;
                        _ = token.cancelled() => Err(FetchError::new(
                            FailureKind::Cancelled,
                            "superseded by a newer selection",
                        )),
                        result = client.fetch_recipe(&url) => result,
                    };
                    match &result {
                        Ok(recipe) => recipe_info!("Fetched recipe {:?} from {}", recipe.title, url),
                        Err(err) => recipe_warn!("Recipe fetch {} failed: {}", url, err),
                    }
                    let _ = event_tx.send(EngineEvent::RecipeFetched { request_id, result });
                });
            }
            EngineCommand::InspectRecipes { search_id, urls } => {
                if let Some((previous_id, previous)) = self.search.take() {
                    recipe_debug!("Search {} superseded by {}", previous_id, search_id);
                    previous.cancel();
                }
                let token = CancellationToken::new();
                self.search = Some((search_id, token.clone()));
                runtime.spawn(inspect_sequentially(client, search_id, urls, token, event_tx));
            }
            EngineCommand::CancelSearch { search_id } => {
                match self.search.take() {
                    Some((id, token)) if id == search_id => token.cancel(),
                    other => self.search = other,
                }
            }
        }
    }
}

async fn inspect_sequentially(
    client: Arc<RecipeClient>,
    search_id: SearchId,
    urls: Vec<String>,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    recipe_info!("Search {} inspecting {} recipes", search_id, urls.len());
    for url in urls {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                recipe_info!("Search {} cancelled", search_id);
                let _ = event_tx.send(EngineEvent::SearchFinished { search_id, cancelled: true });
                return;
            }
            result = client.fetch_recipe(&url) => result,
        };
        if let Err(err) = &result {
            recipe_warn!("Search {} could not inspect {}: {}", search_id, url, err);
        }
        let _ = event_tx.send(EngineEvent::SearchInspected {
            search_id,
            url,
            result,
        });
    }
    let _ = event_tx.send(EngineEvent::SearchFinished {
        search_id,
        cancelled: false,
    });
}
