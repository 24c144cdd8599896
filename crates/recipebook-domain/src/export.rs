//! Plain-text recipe export.
//!
//! The layout is consumed by the "export recipe" download; keep field order
//! and numbering stable.

use std::fmt::Write as _;

use crate::recipe::Recipe;

/// Render `recipe` as the plain-text export document.
pub fn format_recipe_for_export(recipe: &Recipe) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "{}", recipe.title);
    let _ = writeln!(text, "{}", "=".repeat(recipe.title.chars().count()));
    text.push('\n');

    if !recipe.description.is_empty() {
        let _ = writeln!(text, "Description: {}", recipe.description);
        text.push('\n');
    }

    let _ = writeln!(text, "Prep Time: {} minutes", recipe.prep_time_minutes);
    let _ = writeln!(text, "Cook Time: {} minutes", recipe.cook_time_minutes);
    let _ = writeln!(text, "Servings: {}", recipe.servings);
    text.push('\n');

    text.push_str("INGREDIENTS:\n");
    for (index, ingredient) in recipe.ingredients.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", index + 1, ingredient);
    }

    text.push_str("\nINSTRUCTIONS:\n");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", index + 1, instruction);
    }

    if !recipe.notes.is_empty() {
        let _ = writeln!(text, "\nNOTES:\n{}", recipe.notes);
    }

    text.push_str("\n---\n");
    text.push_str("Recipe from My Recipe Book\n");
    text
}

/// Download file name: non-alphanumeric title characters become `_`.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_recipe.txt")
}
