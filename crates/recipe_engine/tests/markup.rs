use pretty_assertions::assert_eq;
use recipe_core::{IngredientGroup, QueueEntryView, Recipe, RecipeView, SelectCommand};
use recipe_engine::{render_queue_markup, RecipeMarkup};

fn apple_pie() -> Recipe {
    Recipe {
        title: "Apple Pie".into(),
        canonical_url: "http://x".into(),
        author: "A".into(),
        ingredient_groups: vec![IngredientGroup {
            purpose: None,
            ingredients: vec!["flour".into(), "sugar".into()],
        }],
        instructions_list: vec!["Mix.".into(), "Bake.".into()],
        host: None,
        yields: None,
        total_time: None,
        category: None,
        nutrients: None,
    }
}

#[test]
fn recipe_regions_are_rendered_in_order() {
    let markup = RecipeMarkup::render(&RecipeView::from(&apple_pie()));

    assert_eq!(markup.title, "Apple Pie");
    assert_eq!(
        markup.source,
        r#"<span>From: <a href="http://x/">A</a></span>"#
    );
    assert_eq!(markup.ingredients, "<ul><li>flour</li><li>sugar</li></ul>");
    assert_eq!(markup.directions, "<p>Mix.</p><p>Bake.</p>");
    assert_eq!(markup.details, "");
}

#[test]
fn group_purpose_becomes_heading() {
    let mut recipe = apple_pie();
    recipe.ingredient_groups.push(IngredientGroup {
        purpose: Some("For the crust".into()),
        ingredients: vec!["butter".into()],
    });

    let markup = RecipeMarkup::render(&RecipeView::from(&recipe));
    assert_eq!(
        markup.ingredients,
        "<ul><li>flour</li><li>sugar</li></ul><h3>For the crust</h3><ul><li>butter</li></ul>"
    );
}

#[test]
fn injected_values_are_escaped() {
    let mut recipe = apple_pie();
    recipe.author = "<script>alert(1)</script>".into();
    recipe.canonical_url = "javascript:alert(1)".into();
    recipe.instructions_list = vec!["Heat to >180 & <200".into()];

    let markup = RecipeMarkup::render(&RecipeView::from(&recipe));
    assert_eq!(
        markup.source,
        r##"<span>From: <a href="#">&lt;script&gt;alert(1)&lt;/script&gt;</a></span>"##
    );
    assert_eq!(markup.directions, "<p>Heat to &gt;180 &amp; &lt;200</p>");
}

#[test]
fn metadata_renders_facts_and_nutrition() {
    let mut recipe = apple_pie();
    recipe.yields = Some("8 servings".into());
    recipe.nutrients = Some(
        [("calories".to_string(), "250 kcal".to_string())]
            .into_iter()
            .collect(),
    );

    let markup = RecipeMarkup::render(&RecipeView::from(&recipe));
    assert_eq!(
        markup.details,
        "<ul class=\"facts\"><li><strong>Yields:</strong> 8 servings</li></ul>\
         <table class=\"nutrition\"><tr><td>calories</td><td>250 kcal</td></tr></table>"
    );
    assert!(markup.to_fragment().contains("<div id=\"details\">"));
}

#[test]
fn queue_items_carry_id_and_url() {
    let entries = vec![QueueEntryView {
        position: 1,
        id: "Mac & Cheese".into(),
        title: "Mac & Cheese".into(),
        command: SelectCommand::new("/recipes/mac.json"),
    }];

    assert_eq!(
        render_queue_markup(&entries),
        "<ul id=\"queue-ul\"><li class=\"list-group-item\" id=\"Mac &amp; Cheese\" \
         data-url=\"/recipes/mac.json\">Mac &amp; Cheese</li></ul>"
    );
}
