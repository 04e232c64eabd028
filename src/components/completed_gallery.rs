use crate::model::RECIPES;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompletedGalleryProps {
    pub completed: Vec<usize>,
}

#[function_component(CompletedGallery)]
pub fn completed_gallery(props: &CompletedGalleryProps) -> Html {
    html! {
        <div id="completed" style="display:flex; gap:8px; min-height:48px; align-items:center;">
            { for props.completed.iter().enumerate().map(|(pos, &index)| {
                let recipe = &RECIPES[index % RECIPES.len()];
                html! { <img key={pos} src={recipe.image} alt={recipe.name} style="width:44px; height:44px;" /> }
            }) }
        </div>
    }
}
