pub mod app;
pub mod cell_grid;
pub mod completed_gallery;
pub mod connectivity;
pub mod end_overlay;
pub mod game_view;
pub mod hud;
pub mod recipe_panel;
pub mod start_overlay;
