//! Recipe engine: HTTP fetching, directory and recipe parsing, markup rendering,
//! and the background thread that executes core effects.
mod catalog;
mod client;
mod decode;
mod engine;
mod fetch;
mod markup;
mod recipe;
mod types;

pub use catalog::{parse_catalog, TITLE_SUFFIX_LEN};
pub use client::{ClientConfig, RecipeClient};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use markup::{escape_html, render_queue_markup, safe_href, RecipeMarkup};
pub use recipe::parse_recipe;
pub use types::{
    EngineEvent, ErrorCategory, FailureKind, FetchError, FetchOutput,
};
