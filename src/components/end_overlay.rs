use crate::model::RECIPES;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EndOverlayProps {
    pub score: i32,
    pub best_score: i32,
    /// (recipe index, completions) pairs in first-completed order.
    pub tally: Vec<(usize, usize)>,
    pub on_play_again: Callback<()>,
}

#[function_component(EndOverlay)]
pub fn end_overlay(props: &EndOverlayProps) -> Html {
    let play_cb = props.on_play_again.clone();
    let play_btn = Callback::from(move |_| play_cb.emit(()));
    html! {
        <div id="end-screen" style="max-width:480px; margin:48px auto; background:rgba(0,0,0,0.85); border:2px solid #f0883e; padding:24px 32px; border-radius:12px; text-align:center;">
            <h2 style="margin:0 0 12px 0; color:#f0883e;">{"Time's Up!"}</h2>
            <p id="final-score" style="margin:4px 0; font-size:24px; font-weight:600;">{ format!("Final score: {}", props.score) }</p>
            <p style="margin:4px 0; opacity:0.7;">{ format!("Best score: {}", props.best_score) }</p>
            <div id="final-dishes" style="display:flex; gap:16px; justify-content:center; margin:16px 0; min-height:80px; align-items:center;">
                { for props.tally.iter().map(|&(index, count)| {
                    let recipe = &RECIPES[index % RECIPES.len()];
                    html! {
                        <div key={index} class="item" style="display:flex; flex-direction:column; align-items:center; gap:4px;">
                            <img src={recipe.image} alt={recipe.name} style="width:56px; height:56px;" />
                            <div style="font-weight:bold; font-size:20px;">{ format!("x {}", count) }</div>
                        </div>
                    }
                }) }
                { if props.tally.is_empty() {
                    html! { <p style="opacity:0.7;">{"No dishes finished this round."}</p> }
                } else {
                    html! {}
                } }
            </div>
            <button id="play-again-btn" onclick={play_btn}>{"Play Again"}</button>
        </div>
    }
}
