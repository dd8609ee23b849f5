//! Venn diagrams for 2 to 6 sets.
//!
//! [`compute_labels`] counts the elements in every region of the diagram;
//! [`venn`] draws the fixed shapes for that many sets and places the labels.
//!
//! ```no_run
//! use vennplot::{Fill, FixedWidthMeasure, VennOptions, compute_labels, venn};
//!
//! let labels = compute_labels(&[vec![1, 2, 3], vec![2, 3, 4]], &[Fill::Number])?;
//! let figure = venn(&labels, &VennOptions::default())?;
//! let svg = figure.to_svg(&mut FixedWidthMeasure::default());
//! # Ok::<(), vennplot::VennError>(())
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod export;
pub mod figure;
pub mod fonts;
pub mod geometry;
pub mod labels;
pub mod pattern;
pub mod render;
pub mod xml;

pub use colors::{ColorSpec, Rgba, resolve_colors};
pub use config::{ConfigError, Element, VennConfig, VennInput};
pub use error::{ErrorKind, VennError};
pub use export::{ExportError, svg_to_pdf, svg_to_png};
pub use figure::{Artist, Axes, Figure, LegendLoc};
pub use fonts::{CosmicTextMeasure, FixedWidthMeasure, TextMeasure};
pub use geometry::{EllipseSpec, ShapeSpec, TriangleSpec, label_positions_for, shapes_for};
pub use labels::{Fill, Labels, compute_labels, counts, partition};
pub use pattern::Pattern;
pub use render::{VennOptions, venn};
