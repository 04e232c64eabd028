//! Core session model for Kitchen Rush.
//!
//! Everything that counts as a game rule lives here: the static recipe and
//! decoy datasets, the per-round [`GameState`], and the reducer that advances
//! it. Randomness enters only through [`SpawnRoll`], which callers sample up
//! front, so every reduction is deterministic and testable on the host.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Ingredient or decoy identifier; doubles as the image asset key.
pub type Item = &'static str;

pub const GRID_CELLS: usize = 9;
/// Soft cap on simultaneously populated cells, checked at spawn time only.
pub const MAX_ACTIVE: usize = 5;
pub const ROUND_SECONDS: u32 = 20;
pub const SPAWN_TICK_MS: u32 = 800;
pub const SPAWN_LIFETIME_MS: u32 = 3_000;
pub const CLEAR_CORRECT_MS: u32 = 200;
pub const CLEAR_WRONG_MS: u32 = 400;
pub const ADVANCE_DELAY_MS: u32 = 500;
pub const POINTS_CORRECT: i32 = 10;
pub const POINTS_WRONG: i32 = -5;
pub const POINTS_COMPLETE: i32 = 30;
/// Pool slots given to each still-missing ingredient in the weighted draw.
pub const NEEDED_WEIGHT: usize = 4;
/// Pool slots filled with independently drawn decoys.
pub const DECOY_SLOTS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub image: &'static str,
    pub ingredients: &'static [Item],
}

pub static RECIPES: [Recipe; 3] = [
    Recipe {
        name: "Hotpot",
        image: "images/hotpot.png",
        ingredients: &["fishcake", "lettuce", "meat", "mushroom"],
    },
    Recipe {
        name: "Sandwich",
        image: "images/sandwich.png",
        ingredients: &["cheese", "beef", "mayo", "bread"],
    },
    Recipe {
        name: "Strawberry Cake",
        image: "images/strawberrycake.png",
        ingredients: &["strawberry", "milk", "flour", "eggs"],
    },
];

/// Items that are never required by any recipe; clicking one is penalized.
pub static DECOYS: [Item; 4] = ["chilli", "rat", "watermelon", "deathfish"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    Correct,
    Wrong,
}

/// Lifecycle of one grid slot. A cell advances Empty -> Occupied ->
/// Clearing -> Empty; the stamp ties scheduled expiry/clear callbacks to the
/// occupancy they were armed for, so a stale timer can never touch a newer
/// occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied { item: Item, stamp: u64 },
    Clearing { item: Item, stamp: u64, flash: Flash },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Ended,
}

/// Outcome of clicking a cell, decided against the active recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
    Correct(Item),
    Wrong(Item),
    EmptyCell,
}

/// Uniform samples feeding one spawn decision: free-cell pick, pool pick,
/// and the two independent decoy draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRoll {
    pub cell: f64,
    pub item: f64,
    pub decoys: [f64; 2],
}

impl SpawnRoll {
    pub fn random() -> Self {
        Self {
            cell: js_sys::Math::random(),
            item: js_sys::Math::random(),
            decoys: [js_sys::Math::random(), js_sys::Math::random()],
        }
    }
}

/// Cross-session aggregates persisted to localStorage by the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStats {
    pub best_score: i32,
    pub rounds_played: u32,
    pub dishes_completed: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub recipe_index: usize,
    /// Ingredients of the active recipe collected so far.
    pub collected: Vec<Item>,
    pub score: i32,
    pub seconds_left: u32,
    /// Completed recipe indices, in completion order (the gallery).
    pub completed: Vec<usize>,
    pub cells: Vec<CellState>,
    /// Round generation; delayed actions carry it and go stale on restart.
    pub round: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            recipe_index: 0,
            collected: Vec::new(),
            score: 0,
            seconds_left: ROUND_SECONDS,
            completed: Vec::new(),
            cells: vec![CellState::Empty; GRID_CELLS],
            round: 0,
        }
    }

    fn fresh_round(round: u32) -> Self {
        Self {
            phase: Phase::Running,
            round,
            ..Self::new()
        }
    }

    pub fn current_recipe(&self) -> &'static Recipe {
        &RECIPES[self.recipe_index % RECIPES.len()]
    }

    /// Ingredients of the active recipe still missing from the collected set.
    pub fn remaining(&self) -> Vec<Item> {
        self.current_recipe()
            .ingredients
            .iter()
            .copied()
            .filter(|item| !self.collected.contains(item))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.current_recipe().ingredients.len()
    }

    /// Occupied plus still-flashing cells; both count against the spawn cap
    /// and neither is eligible for respawning.
    pub fn active_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !matches!(cell, CellState::Empty))
            .count()
    }

    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, CellState::Empty))
            .map(|(index, _)| index)
            .collect()
    }

    /// Classify a click. A cell in `Clearing` still shows its item and is
    /// judged against it, so double-clicking a just-collected ingredient
    /// counts as a wrong click.
    pub fn classify(&self, index: usize) -> Click {
        let item = match self.cells.get(index) {
            Some(CellState::Occupied { item, .. }) | Some(CellState::Clearing { item, .. }) => {
                *item
            }
            _ => return Click::EmptyCell,
        };
        let needed = self.current_recipe().ingredients;
        if needed.contains(&item) && !self.collected.contains(&item) {
            Click::Correct(item)
        } else {
            Click::Wrong(item)
        }
    }

    /// Pick the cell and item for one spawn tick, or `None` when not
    /// running, at the cap, or with no free cell. The cap is best-effort:
    /// it is only ever checked here, never re-enforced by the reducer.
    pub fn choose_spawn(&self, roll: &SpawnRoll) -> Option<(usize, Item)> {
        if self.phase != Phase::Running {
            return None;
        }
        if self.active_count() >= MAX_ACTIVE {
            return None;
        }
        let free = self.free_cells();
        if free.is_empty() {
            return None;
        }
        let index = *pick(&free, roll.cell);
        Some((index, draw_item(&self.remaining(), roll)))
    }

    /// Completed-recipe counts grouped by recipe identity, first-completed
    /// order, for the end-of-round summary.
    pub fn completed_tally(&self) -> Vec<(usize, usize)> {
        let mut tally: Vec<(usize, usize)> = Vec::new();
        for &index in &self.completed {
            match tally.iter_mut().find(|(i, _)| *i == index) {
                Some(entry) => entry.1 += 1,
                None => tally.push((index, 1)),
            }
        }
        tally
    }

    fn set_clearing(&mut self, index: usize, flash: Flash) {
        if let Some(cell) = self.cells.get_mut(index) {
            if let CellState::Occupied { item, stamp }
            | CellState::Clearing { item, stamp, .. } = *cell
            {
                *cell = CellState::Clearing { item, stamp, flash };
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted draw for one spawn: every missing ingredient contributes
/// [`NEEDED_WEIGHT`] slots, decoys fill [`DECOY_SLOTS`] slots drawn
/// independently with replacement. With nothing missing the draw
/// degenerates to a single decoy pick.
pub fn draw_item(remaining: &[Item], roll: &SpawnRoll) -> Item {
    if remaining.is_empty() {
        return *pick(&DECOYS, roll.decoys[0]);
    }
    let mut pool: Vec<Item> = Vec::with_capacity(remaining.len() * NEEDED_WEIGHT + DECOY_SLOTS);
    for &item in remaining {
        for _ in 0..NEEDED_WEIGHT {
            pool.push(item);
        }
    }
    for r in roll.decoys {
        pool.push(*pick(&DECOYS, r));
    }
    *pick(&pool, roll.item)
}

fn pick<T>(slice: &[T], roll: f64) -> &T {
    let index = (roll.clamp(0.0, 1.0) * slice.len() as f64) as usize;
    &slice[index.min(slice.len() - 1)]
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Start or restart a round; the only way into `Running`.
    Start,
    /// One-second countdown tick.
    TickSecond,
    /// Populate an empty cell with a spawned item.
    Spawn { index: usize, item: Item, stamp: u64 },
    /// Player clicked a grid cell.
    ClickCell { index: usize },
    /// A spawn's lifetime expired; only honored while the stamp matches.
    CellExpired { index: usize, stamp: u64 },
    /// A post-click flash finished; only honored while the stamp matches.
    CellCleared { index: usize, stamp: u64 },
    /// Delayed recipe advancement; stale once the round changes.
    Advance { round: u32 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Start => {
                new = GameState::fresh_round(new.round + 1);
            }
            TickSecond => {
                if new.phase != Phase::Running {
                    return self;
                }
                new.seconds_left = new.seconds_left.saturating_sub(1);
                if new.seconds_left == 0 {
                    new.phase = Phase::Ended;
                }
            }
            Spawn { index, item, stamp } => {
                if new.phase != Phase::Running {
                    return self;
                }
                match new.cells.get_mut(index) {
                    Some(cell) if *cell == CellState::Empty => {
                        *cell = CellState::Occupied { item, stamp };
                    }
                    _ => return self,
                }
            }
            ClickCell { index } => {
                if new.phase != Phase::Running {
                    return self;
                }
                match new.classify(index) {
                    Click::EmptyCell => return self,
                    Click::Correct(item) => {
                        new.collected.push(item);
                        new.score += POINTS_CORRECT;
                        new.set_clearing(index, Flash::Correct);
                    }
                    Click::Wrong(_) => {
                        new.score += POINTS_WRONG;
                        new.set_clearing(index, Flash::Wrong);
                    }
                }
            }
            CellExpired { index, stamp } => match new.cells.get_mut(index) {
                Some(cell) => match *cell {
                    CellState::Occupied { stamp: s, .. } if s == stamp => {
                        *cell = CellState::Empty;
                    }
                    _ => return self,
                },
                None => return self,
            },
            CellCleared { index, stamp } => match new.cells.get_mut(index) {
                Some(cell) => match *cell {
                    CellState::Clearing { stamp: s, .. } if s == stamp => {
                        *cell = CellState::Empty;
                    }
                    _ => return self,
                },
                None => return self,
            },
            Advance { round } => {
                if new.phase != Phase::Running || round != new.round || !new.is_complete() {
                    return self;
                }
                new.completed.push(new.recipe_index);
                new.score += POINTS_COMPLETE;
                new.recipe_index = (new.recipe_index + 1) % RECIPES.len();
                new.collected.clear();
            }
        }
        Rc::new(new)
    }
}
