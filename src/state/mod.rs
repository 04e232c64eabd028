pub mod timers;

pub use timers::CellTimers;
