//! Rendering module
//!
//! `frame` builds a display list from game state; `pipeline` draws it with
//! WebGPU. Text (title card, score) goes to the page as DOM overlays.

pub mod cutout;
pub mod frame;
pub mod hud;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, TitleCard, build_frame};
pub use hud::ScoreDisplay;
pub use pipeline::RenderState;
pub use vertex::Vertex;
