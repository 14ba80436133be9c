use recipe_core::Recipe;

use crate::{decode_text, FailureKind, FetchError, FetchOutput};

/// Decodes and deserializes a fetched recipe document.
pub fn parse_recipe(output: &FetchOutput) -> Result<Recipe, FetchError> {
    let decoded = decode_text(&output.bytes, output.content_type.as_deref())
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    serde_json::from_str(&decoded.text)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))
}
