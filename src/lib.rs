//! Floorset - store-layout planning for visual merchandising teams
//!
//! This library provides a grid-snapped 2D layout editor for retail
//! fixtures, a command console driving it, an SVG rendering adapter, and
//! a best-effort client for the merchandising backend (stock, insights,
//! team tasks, layout persistence).
//!
//! # Example
//!
//! ```rust
//! use floorset::editor::LayoutEditor;
//!
//! let mut editor = LayoutEditor::default();
//! let id = editor.add_object("rack").unwrap().id.clone();
//! editor.move_object(&id, 412.0, 287.0);
//!
//! let obj = editor.get(&id).unwrap();
//! assert_eq!((obj.x, obj.y), (400, 280)); // snapped to the 40px grid
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod console;
pub mod editor;
pub mod error;
pub mod render;
pub mod session;
pub mod sync;

pub use app::{Planner, PlannerError};
pub use config::{AppConfig, ConfigError};
pub use console::{parse_line, Command};
pub use editor::{FixtureCatalog, FixtureDefinition, Grid, LayoutEditor, LayoutSnapshot};
pub use error::ParseError;
pub use render::{render_svg, SvgConfig};
pub use session::{Session, SessionError};
