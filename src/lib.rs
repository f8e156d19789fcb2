//! chart-layout: layout and scaling engine for single-series category charts.
//!
//! A [`ChartLayout`] is built once per render pass from a [`ChartConfig`]. It
//! derives the value-to-pixel mapping, label gutters and slot widths, then
//! answers four independent queries: x-axis and y-axis background lines and
//! x-axis and y-axis labels. Results are plain primitive records; the
//! [`render`] module turns them into SVG markup or hands them to any other
//! [`render::Renderer`].
//!
//! Axis naming follows the host props: the "x axis" is the value axis (drawn
//! vertically, labels in a side gutter) and the "y axis" is the category axis
//! (one slot per data point, labels along the bottom).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartLayout};
pub use error::{ChartError, ChartResult};
