mod common;

use assert2::check;
use common::{blender_oven_engine, empty_engine, engine, engine_over, recipe};
use recipe_finder::{Category, FilterEngine, IdSet, Matches, TagCategory};
use rstest::rstest;

fn resolved(engine: &FilterEngine, matches: &Matches) -> Vec<u32> {
    matches.resolve(engine.catalog().ids()).into_vec()
}

/// Tag values and names that start with a word too short to be indexed.
fn short_leading_words_engine() -> FilterEngine {
    engine_over(vec![
        recipe(1, "Le Gratin", &["Le beurre", "Pommes de terre"], "Four", &[], "Cuire au four."),
        recipe(2, "Tarte", &["De la crème", "Farine"], "Four", &[], "Étaler la pâte."),
    ])
}

// --- Category filters ---

#[rstest]
fn empty_selection_is_unconstrained(engine: FilterEngine) {
    for category in TagCategory::ALL {
        let matches = engine.filter_by_category(category);
        check!(matches.is_unconstrained());
        check!(resolved(&engine, &matches) == engine.catalog().ids());
    }
}

#[rstest]
fn selected_tags_intersect(mut engine: FilterEngine) {
    engine.select_tag(TagCategory::Ingredients, "sugar");
    engine.select_tag(TagCategory::Ingredients, "flour");

    let matches = engine.filter_by_category(TagCategory::Ingredients);
    check!(resolved(&engine, &matches) == [2, 3]);
}

#[rstest]
fn tags_are_normalized(mut engine: FilterEngine) {
    engine.select_tag(TagCategory::Appliances, "OVEN");
    check!(engine.selected().tokens(TagCategory::Appliances) == ["oven"]);
    check!(engine.current_visible_ids() == [2, 3]);

    engine.deselect_tag(TagCategory::Appliances, "Oven");
    check!(engine.selected().tokens(TagCategory::Appliances).is_empty());
}

#[rstest]
fn unknown_tag_matches_nothing(mut engine: FilterEngine) {
    let view = engine.select_tag(TagCategory::Ingredients, "truffle");
    check!(view.visible_ids.is_empty());
    check!(view.ingredients.is_empty());
    check!(view.appliances.is_empty());
}

#[rstest]
fn tag_from_another_category_matches_nothing(mut engine: FilterEngine) {
    let view = engine.select_tag(TagCategory::Ingredients, "oven");
    check!(view.visible_ids.is_empty());
}

#[rstest]
fn selecting_twice_is_a_no_op(mut engine: FilterEngine) {
    let first = engine.select_tag(TagCategory::Ustensils, "knife");
    let second = engine.select_tag(TagCategory::Ustensils, "knife");
    check!(first == second);
    check!(engine.selected().tokens(TagCategory::Ustensils) == ["knife"]);
}

#[rstest]
fn deselecting_unselected_tag_is_a_no_op(mut engine: FilterEngine) {
    let before = engine.view();
    let after = engine.deselect_tag(TagCategory::Ingredients, "flour");
    check!(before == after);
}

// --- Free-text search ---

#[rstest]
#[case("ba")]
#[case("  b  ")]
#[case("")]
fn short_query_is_unconstrained(engine: FilterEngine, #[case] query: &str) {
    check!(engine.search_free_text(query).is_unconstrained());
}

#[rstest]
#[case("ban", &[3, 5])]
#[case("coc", &[1, 4])]
#[case("mil", &[6, 1, 4])]
#[case("BAN", &[3, 5])]
#[case(" ban ", &[3, 5])]
#[case("pan", &[6])]
#[case("xyz", &[])]
fn free_text_matches(engine: FilterEngine, #[case] query: &str, #[case] expected: &[u32]) {
    let matches = engine.search_free_text(query);
    check!(!matches.is_unconstrained());
    check!(resolved(&engine, &matches) == expected);
}

#[rstest]
#[case("beu", &[1])]
#[case("crè", &[2])]
#[case("ter", &[1])]
#[case("gra", &[1])]
#[case("pât", &[2])]
fn free_text_reaches_words_after_a_short_one(#[case] query: &str, #[case] expected: &[u32]) {
    let engine = short_leading_words_engine();
    let matches = engine.search_free_text(query);
    check!(resolved(&engine, &matches) == expected);
}

#[rstest]
#[case("ban")]
#[case("coc")]
#[case("mil")]
#[case("app")]
#[case("the")]
#[case("sal")]
fn free_text_is_union_of_fields(engine: FilterEngine, #[case] query: &str) {
    let mut expected = IdSet::default();
    for category in [Category::Ingredients, Category::TitleWords, Category::DescriptionWords] {
        expected.union_with(&engine.index().field(category).matches(query));
    }
    let Matches::Only(actual) = engine.search_free_text(query) else {
        panic!("query '{}' should be constrained", query);
    };
    check!(actual.same_members(&expected));
}

#[rstest]
fn longer_prefix_never_matches_more(engine: FilterEngine) {
    let mut words = Vec::new();
    for category in Category::FREE_TEXT {
        words.extend(engine.index().vocabulary(category).iter().cloned());
    }

    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for len in 3..chars.len() {
            let shorter: String = chars[..len].iter().collect();
            let longer: String = chars[..=len].iter().collect();
            let shorter_ids = engine.search_free_text(&shorter).resolve(engine.catalog().ids());
            let longer_ids = engine.search_free_text(&longer).resolve(engine.catalog().ids());
            check!(
                longer_ids.is_subset(&shorter_ids),
                "'{}' matched more than '{}'",
                longer,
                shorter
            );
        }
    }
}

// --- Combined view ---

#[rstest]
fn no_filters_show_whole_catalog(engine: FilterEngine) {
    check!(engine.current_visible_ids() == [1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn visible_order_follows_catalog_when_tags_are_free(mut engine: FilterEngine) {
    let view = engine.set_query("mil");
    check!(view.visible_ids == [1, 4, 6]);
}

#[rstest]
fn tags_and_query_narrow_together(mut engine: FilterEngine) {
    let view = engine.select_tag(TagCategory::Ingredients, "flour");
    check!(view.visible_ids == [2, 3, 6]);

    let view = engine.select_tag(TagCategory::Appliances, "oven");
    check!(view.visible_ids == [2, 3]);
    check!(view.ingredients == ["apple", "butter", "sugar", "banana", "eggs"]);
    check!(view.appliances.is_empty());
    check!(view.ustensils == ["rolling pin", "pie dish", "loaf pan", "bowl"]);

    let view = engine.set_query("ban");
    check!(view.visible_ids == [3]);

    let view = engine.deselect_tag(TagCategory::Appliances, "oven");
    check!(view.visible_ids == [3]);

    let view = engine.set_query("");
    check!(view.visible_ids == [2, 3, 6]);

    let view = engine.clear_tags();
    check!(view.visible_ids == [1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn blender_and_banana_have_nothing_in_common(
    #[from(blender_oven_engine)] mut engine: FilterEngine,
) {
    engine.select_tag(TagCategory::Appliances, "blender");
    let appliances = engine.filter_by_category(TagCategory::Appliances);
    check!(resolved(&engine, &appliances) == [1]);
    let bananas = engine.search_free_text("ban");
    check!(resolved(&engine, &bananas) == [2]);

    let view = engine.set_query("ban");
    check!(view.visible_ids.is_empty());
}

#[rstest]
fn empty_catalog_yields_empty_results(empty_engine: FilterEngine) {
    let view = empty_engine.view();
    check!(view.visible_ids.is_empty());
    for category in TagCategory::ALL {
        check!(view.options(category).is_empty());
        check!(empty_engine.remaining_options(category, &[]).is_empty());
    }
}

// --- Remaining options ---

#[rstest]
fn unfiltered_options_are_vocabulary_head(engine: FilterEngine) {
    let view = engine.view();
    check!(view.ingredients == engine.index().vocabulary(Category::Ingredients));
    check!(view.appliances == ["blender", "oven", "saucepan", "salad bowl", "frying pan"]);
}

#[rstest]
fn options_follow_visible_recipes(engine: FilterEngine) {
    check!(
        engine.remaining_options(TagCategory::Ustensils, &[4, 6])
            == ["knife", "ladle", "whisk", "bowl"]
    );
    check!(engine.remaining_options(TagCategory::Appliances, &[]).is_empty());
}

#[rstest]
fn repeated_or_foreign_ids_are_not_the_full_set(engine: FilterEngine) {
    check!(engine.remaining_options(TagCategory::Appliances, &[1, 1, 1, 1, 1, 1]) == ["blender"]);
    check!(
        engine.remaining_options(TagCategory::Appliances, &[1, 2, 3, 4, 5, 99])
            == ["blender", "oven", "saucepan", "salad bowl"]
    );
    check!(
        engine.remaining_options(TagCategory::Appliances, &[6, 5, 4, 3, 2, 1])
            == engine.index().vocabulary(Category::Appliances)
    );
}

#[rstest]
fn selected_tags_are_never_offered(mut engine: FilterEngine) {
    let selections = [
        (TagCategory::Ingredients, "coconut milk"),
        (TagCategory::Ustensils, "knife"),
        (TagCategory::Ustensils, "ladle"),
        (TagCategory::Ingredients, "salt"),
    ];
    for (category, tag) in selections {
        let view = engine.select_tag(category, tag);
        for category in TagCategory::ALL {
            for selected in engine.selected().tokens(category) {
                check!(!view.options(category).contains(selected));
                check!(!engine.suggest_tags(category, "").contains(selected));
            }
        }
    }
    check!(engine.current_visible_ids() == [4]);
}

#[test]
fn selected_tag_excluded_even_when_everything_is_visible() {
    // Every recipe carries "shared", so the visible set stays whole.
    let mut shared = engine_over(vec![
        recipe(1, "One", &["Salt"], "Oven", &["shared"], ""),
        recipe(2, "Two", &["Pepper"], "Oven", &["shared"], ""),
    ]);
    let view = shared.select_tag(TagCategory::Ustensils, "shared");
    check!(view.visible_ids == [1, 2]);
    check!(view.ustensils.is_empty());
    check!(view.appliances == ["oven"]);
}

#[test]
fn options_are_capped() {
    let recipes = (1..=40)
        .map(|id| {
            let ingredient = format!("ingredient {id}");
            recipe(id, "Big batch", &[ingredient.as_str()], "Oven", &[], "")
        })
        .collect();
    let mut engine = engine_over(recipes);

    let view = engine.view();
    check!(view.ingredients.len() == 30);
    check!(view.ingredients[0] == "ingredient 1");

    let visible: Vec<u32> = (1..=35).collect();
    check!(engine.remaining_options(TagCategory::Ingredients, &visible).len() == 30);

    let view = engine.set_query("ingredient");
    check!(view.visible_ids.len() == 40);
    check!(view.ingredients.len() <= 30);
    check!(engine.suggest_tags(TagCategory::Ingredients, "ing").len() == 30);
}

// --- Autocomplete ---

#[rstest]
fn tag_suggestions_surface_phrases(mut engine: FilterEngine) {
    check!(engine.suggest_tags(TagCategory::Ingredients, "mi") == ["milk", "coconut milk"]);
    check!(engine.suggest_tags(TagCategory::Ustensils, "squ") == ["lemon squeezer"]);
    check!(engine.suggest_tags(TagCategory::Appliances, "zzz").is_empty());

    engine.select_tag(TagCategory::Appliances, "blender");
    check!(engine.suggest_tags(TagCategory::Ingredients, "mi") == ["coconut milk"]);

    engine.clear_tags();
    engine.select_tag(TagCategory::Ingredients, "coconut milk");
    check!(engine.suggest_tags(TagCategory::Ingredients, "mi").is_empty());
}

#[rstest]
fn empty_tag_input_lists_remaining_options(mut engine: FilterEngine) {
    let view = engine.select_tag(TagCategory::Ingredients, "eggs");
    check!(engine.suggest_tags(TagCategory::Ustensils, "") == view.ustensils);
}

#[rstest]
#[case("pie", &["Apple Pie"])]
#[case("coc", &["Lemon Coconut Smoothie"])]
#[case("sal", &["Fruit Salad"])]
#[case("Ban", &["Banana Bread"])]
#[case("so", &[])]
#[case("quiche", &[])]
fn recipe_name_suggestions(engine: FilterEngine, #[case] query: &str, #[case] expected: &[&str]) {
    check!(engine.suggest_recipes(query) == expected);
}

#[test]
fn suggestions_reach_words_after_a_short_one() {
    let engine = short_leading_words_engine();
    check!(engine.suggest_recipes("gra") == ["Le Gratin"]);
    check!(engine.suggest_recipes("le g") == ["Le Gratin"]);
    check!(engine.suggest_recipes("tar") == ["Tarte"]);
    check!(engine.suggest_tags(TagCategory::Ingredients, "crè") == ["de la crème"]);
    check!(engine.suggest_tags(TagCategory::Ingredients, "beu") == ["le beurre"]);
}

#[rstest]
fn sessions_are_independent(engine: FilterEngine) {
    let mut first = engine.clone();
    let second = engine;
    first.select_tag(TagCategory::Appliances, "oven");
    check!(first.current_visible_ids() == [2, 3]);
    check!(second.current_visible_ids() == [1, 2, 3, 4, 5, 6]);
}
