//! Plain-text rendering of a filter view.

use crate::card::{NO_RESULTS_HINT, RecipeCard};
use crate::filter::{FilterEngine, FilterView};
use crate::search::TagCategory;
use std::fmt::Write as _;

/// Placeholder for a dropdown with nothing left to offer.
pub const NO_OPTIONS: &str = "(no match)";

/// Renders selected tags, recipe cards and remaining options.
pub fn render_view(engine: &FilterEngine, view: &FilterView) -> String {
    let mut output = String::new();

    if !engine.query().trim().is_empty() {
        let _ = writeln!(output, "Search: '{}'", engine.query().trim());
    }
    for category in TagCategory::ALL {
        let selected = engine.selected().tokens(category);
        if !selected.is_empty() {
            let _ = writeln!(output, "Selected {}: {}", category.label(), selected.join(", "));
        }
    }
    if !output.is_empty() {
        output.push('\n');
    }

    if view.visible_ids.is_empty() {
        output.push_str(NO_RESULTS_HINT);
        output.push_str("\n\n");
    } else {
        let _ = writeln!(output, "{} recipes:\n", view.visible_ids.len());
        for (idx, recipe) in view
            .visible_ids
            .iter()
            .filter_map(|&id| engine.catalog().get(id))
            .enumerate()
        {
            render_card(&mut output, idx + 1, &RecipeCard::from(recipe));
        }
    }

    for category in TagCategory::ALL {
        output.push_str(&render_options(category, view.options(category)));
    }

    output
}

fn render_card(output: &mut String, position: usize, card: &RecipeCard) {
    let _ = writeln!(
        output,
        "{}. {} [#{}] - {} min",
        position, card.name, card.id, card.time_minutes
    );
    for line in &card.ingredient_lines {
        let _ = writeln!(output, "   - {}", line);
    }
    if !card.description.is_empty() {
        let _ = writeln!(output, "   {}", card.description);
    }
    output.push('\n');
}

/// One dropdown as a single line.
pub fn render_options(category: TagCategory, options: &[String]) -> String {
    if options.is_empty() {
        format!("{}: {}\n", category.label(), NO_OPTIONS)
    } else {
        format!("{}: {}\n", category.label(), options.join(", "))
    }
}
