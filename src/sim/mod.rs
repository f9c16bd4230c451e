mod input;
mod player;

pub use input::{InputCmd, MOVE_STEP, TURN_STEP, step};
pub use player::Player;
