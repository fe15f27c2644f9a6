pub mod geo_traits;
mod rect;

pub use rect::Rect;
