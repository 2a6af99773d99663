//! Canned recipes served when the recipe API quota is used up, so the client
//! still gets something to render.

use crate::matching::{RecipeCandidate, RecipeIngredient};

fn ingredients(pairs: &[(&str, &str)]) -> Vec<RecipeIngredient> {
    pairs
        .iter()
        .map(|(name, original)| RecipeIngredient::new(*name, *original))
        .collect()
}

pub fn fallback_recipes() -> Vec<RecipeCandidate> {
    vec![
        RecipeCandidate {
            id: 73420,
            title: "Apple Or Peach Strudel".to_string(),
            image: "https://img.spoonacular.com/recipes/73420-312x231.jpg".to_string(),
            ingredients: ingredients(&[
                ("apples", "6 large baking apples"),
                ("flour", "1 cup flour"),
                ("sugar", "1/2 cup sugar"),
                ("baking powder", "1 tsp baking powder"),
                ("cinnamon", "1 tsp cinnamon"),
            ]),
        },
        RecipeCandidate {
            id: 632660,
            title: "Apricot Glazed Apple Tart".to_string(),
            image: "https://img.spoonacular.com/recipes/632660-312x231.jpg".to_string(),
            ingredients: ingredients(&[
                ("apples", "4 granny smith apples"),
                ("flour", "1 1/2 cups all-purpose flour"),
                ("sugar", "2 tbsp sugar"),
                ("apricot preserves", "1/2 cup apricot preserves"),
            ]),
        },
    ]
}
