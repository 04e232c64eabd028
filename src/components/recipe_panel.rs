use crate::model::{Item, RECIPES};
use crate::util::image_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipePanelProps {
    pub recipe_index: usize,
    pub collected: Vec<Item>,
}

#[function_component(RecipePanel)]
pub fn recipe_panel(props: &RecipePanelProps) -> Html {
    let recipe = &RECIPES[props.recipe_index % RECIPES.len()];
    html! {
        <div id="recipe-panel" style="display:flex; align-items:center; gap:16px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px;">
            <img id="dish-img" src={recipe.image} alt={recipe.name} style="width:64px; height:64px;" />
            <div style="display:flex; flex-direction:column; gap:6px;">
                <div id="dish-name" style="font-size:18px; font-weight:600;">{ recipe.name }</div>
                <div id="needed-ingredients" style="display:flex; gap:6px;">
                    { for recipe.ingredients.iter().map(|item| {
                        let class = if props.collected.contains(item) { "needed collected" } else { "needed" };
                        html! {
                            <img key={*item} class={class} src={image_path(item)} alt={*item}
                                 style="width:36px; height:36px;" />
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
