use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Mirrors the smart-floor status feed as a glyph. The host page bridges the
/// real channel into `CustomEvent("smartfloor-status")` with a boolean
/// detail; there is no retry, so a dropped feed freezes the last glyph.
#[function_component(ConnectivityIndicator)]
pub fn connectivity_indicator() -> Html {
    let connected = use_state(|| false);
    {
        let connected = connected.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "smartfloor-status", move |event| {
                    if let Some(status) = event
                        .dyn_ref::<web_sys::CustomEvent>()
                        .and_then(|e| e.detail().as_bool())
                    {
                        connected.set(status);
                    }
                })
            });
            move || drop(listener)
        });
    }
    html! {
        <span id="conn-icon" title="smart floor" style="font-size:18px;">
            { if *connected { "✅" } else { "❌" } }
        </span>
    }
}
