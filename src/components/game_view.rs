use crate::components::cell_grid::CellGrid;
use crate::components::completed_gallery::CompletedGallery;
use crate::components::hud::Hud;
use crate::components::recipe_panel::RecipePanel;
use crate::model::{
    ADVANCE_DELAY_MS, CLEAR_CORRECT_MS, CLEAR_WRONG_MS, CellState, Click, GameAction, GameState,
    SPAWN_LIFETIME_MS, SPAWN_TICK_MS, SpawnRoll,
};
use crate::state::CellTimers;
use crate::util::play_sound;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let timers = use_mut_ref(CellTimers::new);
    // Always-current handle so long-lived timer closures never read a stale
    // snapshot.
    let game_ref = use_mut_ref(|| props.game.clone());
    *game_ref.borrow_mut() = props.game.clone();

    // Round tickers: 1 s countdown and the spawner. Recreated when the round
    // restarts; dropping them on cleanup cancels both, and any timers still
    // pending from the previous round go with them.
    {
        let game_ref = game_ref.clone();
        let timers = timers.clone();
        use_effect_with(props.game.round, move |_| {
            let countdown = Interval::new(1_000, {
                let game_ref = game_ref.clone();
                move || {
                    let handle = game_ref.borrow().clone();
                    handle.dispatch(GameAction::TickSecond);
                }
            });
            let spawner = Interval::new(SPAWN_TICK_MS, {
                let game_ref = game_ref.clone();
                let timers = timers.clone();
                move || {
                    let handle = game_ref.borrow().clone();
                    let roll = SpawnRoll::random();
                    if let Some((index, item)) = handle.choose_spawn(&roll) {
                        let stamp = timers.borrow_mut().next_stamp();
                        handle.dispatch(GameAction::Spawn { index, item, stamp });
                        let expiry = Timeout::new(SPAWN_LIFETIME_MS, {
                            let handle = handle.clone();
                            move || handle.dispatch(GameAction::CellExpired { index, stamp })
                        });
                        timers.borrow_mut().arm_cell(index, expiry);
                    }
                }
            });
            move || {
                drop(countdown);
                drop(spawner);
                timers.borrow_mut().cancel_all();
            }
        });
    }

    // Completion cue: the gallery only ever grows within a round.
    use_effect_with(props.game.completed.len(), move |count| {
        if *count > 0 {
            play_sound("snd-correct");
        }
        || ()
    });

    let on_cell_click = {
        let game_ref = game_ref.clone();
        let timers = timers.clone();
        Callback::from(move |index: usize| {
            let handle = game_ref.borrow().clone();
            let state = (*handle).clone();
            let click = state.classify(index);
            let delay = match click {
                Click::EmptyCell => return,
                Click::Correct(_) => {
                    play_sound("snd-correct");
                    CLEAR_CORRECT_MS
                }
                Click::Wrong(_) => {
                    play_sound("snd-wrong");
                    CLEAR_WRONG_MS
                }
            };
            let stamp = match state.cells.get(index) {
                Some(CellState::Occupied { stamp, .. })
                | Some(CellState::Clearing { stamp, .. }) => *stamp,
                _ => return,
            };
            let completes = matches!(click, Click::Correct(_))
                && state.collected.len() + 1 == state.current_recipe().ingredients.len();
            handle.dispatch(GameAction::ClickCell { index });
            let clear = Timeout::new(delay, {
                let handle = handle.clone();
                move || handle.dispatch(GameAction::CellCleared { index, stamp })
            });
            timers.borrow_mut().arm_cell(index, clear);
            if completes {
                let round = state.round;
                let advance = Timeout::new(ADVANCE_DELAY_MS, {
                    let handle = handle.clone();
                    move || handle.dispatch(GameAction::Advance { round })
                });
                timers.borrow_mut().arm_advance(advance);
            }
        })
    };

    let state = (*props.game).clone();
    html! {
        <div id="game-screen" style="display:flex; flex-direction:column; align-items:center; gap:16px; padding:16px;">
            <Hud score={state.score} seconds_left={state.seconds_left} />
            <RecipePanel recipe_index={state.recipe_index} collected={state.collected.clone()} />
            <CellGrid cells={state.cells.clone()} on_cell_click={on_cell_click} />
            <CompletedGallery completed={state.completed.clone()} />
        </div>
    }
}
