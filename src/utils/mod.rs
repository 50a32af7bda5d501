pub mod evaluate;
pub mod game;
pub mod grid;
pub mod keyboard;
pub mod outcome;
pub mod settings;
pub mod tile;
pub mod ui;
pub mod words;
