pub mod input_render;
mod input_state;
pub mod reader;

pub use input_state::InputState;
pub use reader::InputReader;
