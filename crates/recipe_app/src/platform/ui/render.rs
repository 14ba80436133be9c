use std::fmt::Write;

use recipe_core::{AppViewModel, CatalogStatusView, DetailView, RecipeView, SearchView};
use recipe_engine::{escape_html, render_queue_markup, RecipeMarkup};

use crate::cli::OutputFormat;

pub fn render(view: &AppViewModel, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Html => render_html(view),
    }
}

/// Only the search status line, for progress updates that leave the screen as it is.
pub fn render_status(view: &AppViewModel, format: OutputFormat) -> String {
    let Some(search) = &view.search else {
        return String::new();
    };
    match format {
        OutputFormat::Text => format!("{}\n", search_line(search)),
        OutputFormat::Html => search_markup(search),
    }
}

/// Server text on one line with terminal control characters removed.
fn clean(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

pub fn render_text(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", status_line(view));
    for entry in &view.queue {
        let _ = writeln!(out, "{:>4}. {}", entry.position, clean(&entry.title));
    }
    if let Some(search) = &view.search {
        let _ = writeln!(out, "{}", search_line(search));
    }

    match &view.detail {
        DetailView::Empty => {}
        DetailView::Loading { url } => {
            let _ = writeln!(out, "\nLoading {}...", clean(url));
        }
        DetailView::Failed { url, message } => {
            let _ = writeln!(out, "\nCould not load {}: {}", clean(url), clean(message));
        }
        DetailView::Recipe(recipe) => {
            out.push('\n');
            write_recipe_text(&mut out, recipe);
        }
    }
    out
}

fn status_line(view: &AppViewModel) -> String {
    match &view.catalog {
        CatalogStatusView::Idle => "No recipes loaded".to_string(),
        CatalogStatusView::Loading => "Loading recipes...".to_string(),
        CatalogStatusView::Ready { count } => {
            format!("== Recipes: showing {} of {} ==", view.queue.len(), count)
        }
        CatalogStatusView::Failed { message } => {
            format!("Could not load recipes: {}", clean(message))
        }
    }
}

fn search_line(search: &SearchView) -> String {
    let mut line = format!(
        "Search {:?}: {} match{}",
        clean(&search.keyword),
        search.matches,
        if search.matches == 1 { "" } else { "es" }
    );
    if search.in_progress {
        let _ = write!(line, ", checking ingredients of {} more", search.pending);
    }
    if search.failed > 0 {
        let _ = write!(line, ", {} could not be checked", search.failed);
    }
    line
}

fn write_recipe_text(out: &mut String, recipe: &RecipeView) {
    let _ = writeln!(out, "-- {} --", clean(&recipe.title));
    let _ = writeln!(
        out,
        "From: {} <{}>",
        clean(&recipe.source.author),
        clean(&recipe.source.href)
    );
    for (label, value) in &recipe.facts {
        let _ = writeln!(out, "{label}: {}", clean(value));
    }

    let _ = writeln!(out, "\nIngredients");
    for section in &recipe.ingredient_sections {
        if let Some(heading) = &section.heading {
            let _ = writeln!(out, "  {}", clean(heading));
        }
        for item in &section.items {
            let _ = writeln!(out, "  - {}", clean(item));
        }
    }

    let _ = writeln!(out, "\nDirections");
    for (idx, step) in recipe.directions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", idx + 1, clean(step));
    }

    if !recipe.nutrients.is_empty() {
        let _ = writeln!(out, "\nNutrition");
        for (name, value) in &recipe.nutrients {
            let _ = writeln!(out, "  {}: {}", clean(name), clean(value));
        }
    }
}

fn search_markup(search: &SearchView) -> String {
    format!(
        "<div id=\"search-status\">{}</div>\n",
        escape_html(&search_line(search))
    )
}

pub fn render_html(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!-- {} -->", status_line(view).replace("--", "-"));
    let _ = writeln!(out, "{}", render_queue_markup(&view.queue));
    if let Some(search) = &view.search {
        out.push_str(&search_markup(search));
    }
    match &view.detail {
        DetailView::Empty => {}
        DetailView::Loading { url } => {
            let _ = writeln!(
                out,
                "<div id=\"detail-loading\">Loading {}...</div>",
                escape_html(url)
            );
        }
        DetailView::Failed { url, message } => {
            let _ = writeln!(
                out,
                "<div id=\"detail-error\">Could not load {}: {}</div>",
                escape_html(url),
                escape_html(message)
            );
        }
        DetailView::Recipe(recipe) => {
            out.push_str(&RecipeMarkup::render(recipe).to_fragment());
        }
    }
    out
}
