use recipe_core::RecipeStub;
use recipe_logging::{recipe_debug, recipe_warn};
use scraper::{Html, Selector};

/// Characters trimmed from the end of every list item's text to form its title.
///
/// The directory page decorates each entry with a fixed 5-character trailer.
pub const TITLE_SUFFIX_LEN: usize = 5;

/// Parses the directory markup into stubs, in document order.
///
/// Every `<li>` contributes one stub built from its first `<a href>`; the fetch
/// path is `{route}/{href}`. Items without a link are skipped.
pub fn parse_catalog(markup: &str, route: &str) -> Vec<RecipeStub> {
    let fragment = Html::parse_fragment(markup);
    let (Ok(item_sel), Ok(link_sel)) = (Selector::parse("li"), Selector::parse("a")) else {
        return Vec::new();
    };
    let route = route.trim_end_matches('/');

    let mut stubs = Vec::new();
    for (position, item) in fragment.select(&item_sel).enumerate() {
        let href = item
            .select(&link_sel)
            .next()
            .and_then(|link| link.value().attr("href"));
        let Some(href) = href else {
            recipe_warn!("Directory item {} has no link; skipping", position);
            continue;
        };

        let text: String = item.text().collect();
        stubs.push(RecipeStub {
            title: trim_title_suffix(&text).to_string(),
            url: format!("{route}/{href}"),
        });
    }
    recipe_debug!("Parsed {} directory entries", stubs.len());
    stubs
}

fn trim_title_suffix(text: &str) -> &str {
    let keep = text.chars().count().saturating_sub(TITLE_SUFFIX_LEN);
    match text.char_indices().nth(keep) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
