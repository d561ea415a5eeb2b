pub mod markup;
pub mod text;

pub use markup::{InlineStyle, Segment, parse_inline, render_inline};
pub use text::{rule, truncate};
