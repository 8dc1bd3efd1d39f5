//! Prompt construction for the generative models.
//!
//! Prompts live in markdown templates under `src/prompts/` and are
//! instantiated by placeholder replacement. Two recipe templates exist because
//! the exclusion-aware variant changes the output contract too: it asks for a
//! fourth key, `usedIngredients`, on top of the three the plain variant
//! requires.

/// Build the recipe-recommendation prompt.
///
/// Callers must validate that `ingredients` is non-empty first; this function
/// happily renders an empty list.
pub fn recipe_prompt(ingredients: &[String], exclude: &[String]) -> String {
    if exclude.is_empty() {
        include_str!("prompts/recommend.md").replace("{ingredients}", &ingredients.join(", "))
    } else {
        include_str!("prompts/recommend-excluding.md")
            .replace("{ingredients}", &ingredients.join(", "))
            .replace("{exclusions}", &exclude.join(", "))
    }
}

/// Build the food-photograph prompt for a dish.
pub fn image_prompt(dish_name: &str) -> String {
    include_str!("prompts/image-scene.md").replace("{dish_name}", dish_name)
}
