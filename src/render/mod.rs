//! SVG rendering adapter for the layout canvas
//!
//! A thin view over the editor state: the snap grid, one group per placed
//! object (translated, rotated, scaled from its fixture's base size), a
//! label, and a highlight class on the selection. Objects whose fixture
//! type is no longer in the catalog are skipped silently.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
