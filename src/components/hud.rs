use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: i32,
    pub seconds_left: u32,
}

#[function_component(Hud)]
pub fn hud(props: &HudProps) -> Html {
    let value_style = "min-width:48px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600; font-size:20px;";
    html! {
        <div style="display:flex; gap:32px; align-items:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 18px;">
            <div style="display:flex; align-items:center; gap:8px;">
                <span style="color:#d4af37;">{"Score"}</span>
                <span id="score" style={format!("{value_style} color:#d4af37;")}>{ props.score }</span>
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                <span style="color:#f85149;">{"Time"}</span>
                <span id="timer" style={format!("{value_style} color:#f85149;")}>{ props.seconds_left }</span>
            </div>
        </div>
    }
}
