use crate::components::connectivity::ConnectivityIndicator;
use crate::components::end_overlay::EndOverlay;
use crate::components::game_view::GameView;
use crate::components::start_overlay::StartOverlay;
use crate::model::{GameAction, GameState, Phase, SavedStats};
use crate::util::play_sound;
use yew::prelude::*;

const STATS_KEY: &str = "kr_stats";

fn load_stats() -> Option<SavedStats> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(STATS_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn save_stats(stats: &SavedStats) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = serde_json::to_string(stats) {
                let _ = store.set_item(STATS_KEY, &raw);
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::new);
    let stats = use_state(SavedStats::default);

    // Load persisted aggregates once.
    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = load_stats() {
                stats.set(saved);
            }
            || ()
        });
    }

    // Terminal cue plus folding the finished round into the saved aggregates.
    {
        let stats = stats.clone();
        let score = game.score;
        let dishes = game.completed.len() as u32;
        use_effect_with(game.phase, move |phase| {
            if *phase == Phase::Ended {
                play_sound("snd-win");
                let mut updated = *stats;
                updated.best_score = updated.best_score.max(score);
                updated.rounds_played += 1;
                updated.dishes_completed += dishes;
                save_stats(&updated);
                stats.set(updated);
            }
            || ()
        });
    }

    let start = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Start))
    };

    let content = match game.phase {
        Phase::NotStarted => html! {
            <StartOverlay best_score={stats.best_score} on_start={start.clone()} />
        },
        Phase::Running => html! { <GameView game={game.clone()} /> },
        Phase::Ended => html! {
            <EndOverlay
                score={game.score}
                best_score={stats.best_score.max(game.score)}
                tally={game.completed_tally()}
                on_play_again={start.clone()}
            />
        },
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:sans-serif;">
            <header id="top-bar" style="display:flex; align-items:center; justify-content:space-between; padding:10px 16px; border-bottom:1px solid #30363d;">
                <h1 style="margin:0; font-size:20px;">{"Kitchen Rush"}</h1>
                <ConnectivityIndicator />
            </header>
            { content }
        </div>
    }
}
