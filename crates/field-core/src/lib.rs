pub mod autoplay;
pub mod constants;
pub mod engine;
pub mod surface;
pub mod variant;

// Shaders bundled as string constants
pub static FIELD_VERT_GLSL: &str = include_str!("../shaders/field.vert");
pub static FIELD_FRAG_GLSL: &str = include_str!("../shaders/field.frag");

pub use autoplay::*;
pub use constants::*;
pub use engine::*;
pub use surface::*;
pub use variant::*;
