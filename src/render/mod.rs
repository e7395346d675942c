pub mod renderer;
pub mod tiles;

pub use renderer::{Hud, Renderer};
pub use tiles::{compose_tiles, render_text, Tile};
