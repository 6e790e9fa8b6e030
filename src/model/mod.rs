pub mod chart;
pub mod element;

pub use chart::{COLOR_PALETTE, Chart, ChartShape};
pub use element::Element;
