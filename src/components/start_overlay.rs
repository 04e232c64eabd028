use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartOverlayProps {
    pub best_score: i32,
    pub on_start: Callback<()>,
}

#[function_component(StartOverlay)]
pub fn start_overlay(props: &StartOverlayProps) -> Html {
    let start_cb = props.on_start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div id="start-screen" style="max-width:520px; margin:48px auto; background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Kitchen Rush"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Cook as many dishes as you can before the clock runs out."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Ingredients pop up on the grid and vanish after a few seconds."}</li>
                <li>{"Click the ones the current dish needs: +10 each."}</li>
                <li>{"A wrong item or a repeat costs 5 points."}</li>
                <li>{"Finish a dish for a +30 bonus; the next one loads right away."}</li>
                <li>{"One round lasts 20 seconds."}</li>
            </ul>
            { if props.best_score > 0 {
                html! { <p style="text-align:center; opacity:0.7;">{ format!("Best score: {}", props.best_score) }</p> }
            } else {
                html! {}
            } }
            <div style="display:flex; justify-content:center; margin-top:8px;">
                <button id="start-btn" onclick={start_btn}>{"Start"}</button>
            </div>
        </div>
    }
}
