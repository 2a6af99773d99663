use super::assembler::RankedRecipe;

/// Orders recipes by ascending missed-ingredient count.
///
/// `sort_by_key` is stable, so recipes with equal counts keep the order the
/// recipe source returned them in.
pub fn rank(mut recipes: Vec<RankedRecipe>) -> Vec<RankedRecipe> {
    recipes.sort_by_key(|recipe| recipe.missed_ingredient_count);
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, missed: usize) -> RankedRecipe {
        RankedRecipe {
            id,
            title: format!("recipe {id}"),
            image: String::new(),
            missed_ingredient_count: missed,
            missed_ingredients: Vec::new(),
            used_ingredients: Vec::new(),
        }
    }

    #[test]
    fn sorts_ascending_and_keeps_ties_in_input_order() {
        let input = vec![
            recipe(10, 3),
            recipe(11, 1),
            recipe(12, 0),
            recipe(13, 1),
            recipe(14, 3),
            recipe(15, 1),
        ];
        let ranked = rank(input);
        let ids: Vec<i64> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![12, 11, 13, 15, 10, 14]);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].missed_ingredient_count <= w[1].missed_ingredient_count));
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
