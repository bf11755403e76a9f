// IsshA 遊戲外殼庫
pub mod cell;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod shell;
pub mod sprite;
pub mod timer;
pub mod utils;

pub use crate::cell::{Cell, GamePos, Grid, ScreenPos};
pub use crate::config::{Config, ConfigBuilder, InputMode};
pub use crate::error::{Error, Result};
pub use crate::input::{Delta, Direction, InputEvent, InputMapper};
pub use crate::render::{render_pass, Canvas, FrameBuffer};
pub use crate::shell::GameShell;
pub use crate::sprite::{Batch, Bitmap, Drawable, SpriteState};
pub use crate::timer::Ticker;
