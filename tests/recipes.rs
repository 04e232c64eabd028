// Dataset invariants for the static recipe and decoy tables, plus the
// end-of-round tally grouping. Native-friendly, no browser APIs.

use std::collections::HashSet;
use yew_kitchen_rush::model::{DECOYS, GameState, RECIPES};

#[test]
fn every_recipe_needs_four_ingredients() {
    assert_eq!(RECIPES.len(), 3);
    for recipe in &RECIPES {
        assert_eq!(recipe.ingredients.len(), 4, "recipe '{}'", recipe.name);
    }
}

#[test]
fn ingredients_are_unique_within_a_recipe() {
    for recipe in &RECIPES {
        let mut seen = HashSet::new();
        for item in recipe.ingredients {
            assert!(seen.insert(*item), "duplicate '{}' in '{}'", item, recipe.name);
        }
    }
}

#[test]
fn identifiers_are_asset_safe() {
    let all = RECIPES
        .iter()
        .flat_map(|r| r.ingredients.iter().copied())
        .chain(DECOYS.iter().copied());
    for id in all {
        assert!(!id.is_empty());
        assert!(
            id.chars().all(|c| c.is_ascii_lowercase()),
            "identifier '{id}' is not a plain lowercase asset key"
        );
    }
}

#[test]
fn decoys_are_never_required_by_any_recipe() {
    for decoy in &DECOYS {
        for recipe in &RECIPES {
            assert!(
                !recipe.ingredients.contains(decoy),
                "decoy '{}' appears in '{}'",
                decoy,
                recipe.name
            );
        }
    }
}

#[test]
fn names_and_images_are_unique_and_well_formed() {
    let mut names = HashSet::new();
    let mut images = HashSet::new();
    for recipe in &RECIPES {
        assert!(!recipe.name.is_empty());
        assert!(names.insert(recipe.name), "duplicate name '{}'", recipe.name);
        assert!(
            recipe.image.starts_with("images/") && recipe.image.ends_with(".png"),
            "image path '{}'",
            recipe.image
        );
        assert!(images.insert(recipe.image), "duplicate image '{}'", recipe.image);
    }
}

#[test]
fn first_recipe_is_hotpot() {
    assert_eq!(RECIPES[0].name, "Hotpot");
    let needed: HashSet<&str> = RECIPES[0].ingredients.iter().copied().collect();
    let expected: HashSet<&str> = ["fishcake", "lettuce", "meat", "mushroom"].into_iter().collect();
    assert_eq!(needed, expected);
    assert_eq!(RECIPES[1].name, "Sandwich");
}

#[test]
fn tally_groups_completions_by_recipe_identity() {
    let mut state = GameState::new();
    state.completed = vec![0, 1, 0, 0];
    assert_eq!(state.completed_tally(), vec![(0, 3), (1, 1)]);

    state.completed.clear();
    assert!(state.completed_tally().is_empty());
}
