// Utility helpers shared across components.

use wasm_bindgen::{JsCast, JsValue};

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Image path for an ingredient, decoy, or recipe id.
pub fn image_path(item: &str) -> String {
    format!("images/{item}.png")
}

/// Rewind and play one of the host page's audio elements. Playback failure
/// is swallowed (logged only); a missing element is a silent no-op.
pub fn play_sound(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let Ok(audio) = element.dyn_into::<web_sys::HtmlAudioElement>() else {
        return;
    };
    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => {
            // Autoplay rejections surface as a rejected promise; swallow them so
            // they don't show up as unhandled rejections in the console.
            let closure =
                wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(|_: JsValue| {});
            let _ = promise.catch(&closure);
            closure.forget();
        }
        Err(_) => clog("audio play failed"),
    }
}
