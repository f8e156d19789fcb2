pub mod scale;
pub mod series;
pub mod types;

pub use scale::ValueScale;
pub use series::{SeriesExtent, normalize_category_labels};
pub use types::Viewport;
