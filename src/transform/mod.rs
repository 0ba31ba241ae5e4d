mod css;
mod transform_state;

pub use css::{TRANSFORM_ORIGIN, format_transform};
pub use transform_state::TransformState;
