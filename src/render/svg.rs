//! SVG generation from the live layout

use crate::editor::{FixtureCatalog, Grid, LayoutEditor, PlacedObject};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    grid_lines: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            grid_lines: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the snap grid as one line per grid row/column.
    pub fn add_grid(&mut self, grid: &Grid) {
        let prefix = self.prefix();
        for i in 0..=grid.columns() {
            let x = i * grid.unit;
            self.grid_lines.push(format!(
                r#"{}<line class="{}grid" x1="{}" y1="0" x2="{}" y2="{}"/>"#,
                self.indent_str(),
                prefix,
                x,
                x,
                grid.canvas_height
            ));
        }
        for i in 0..=grid.rows() {
            let y = i * grid.unit;
            self.grid_lines.push(format!(
                r#"{}<line class="{}grid" x1="0" y1="{}" x2="{}" y2="{}"/>"#,
                self.indent_str(),
                prefix,
                y,
                grid.canvas_width,
                y
            ));
        }
    }

    /// Add one placed object: a group translated to the object's snapped
    /// position and rotated about its center, containing the fixture rect
    /// and a label above it.
    pub fn add_object(&mut self, obj: &PlacedObject, catalog: &FixtureCatalog, selected: bool) {
        // An object whose fixture type left the catalog has no dimensions
        // to draw; it is skipped, not an error.
        let Some(def) = catalog.get(&obj.type_key) else {
            return;
        };

        let prefix = self.prefix();
        let width = def.base_width * obj.scale;
        let height = def.base_height * obj.scale;

        let mut classes = format!("{}object", prefix);
        if selected {
            classes.push_str(&format!(" {}selected", prefix));
        }

        let transform = if obj.rotation_degrees == 0 {
            format!("translate({},{})", obj.x, obj.y)
        } else {
            format!("translate({},{}) rotate({})", obj.x, obj.y, obj.rotation_degrees)
        };

        let indent = self.indent_str();
        let inner = if self.config.pretty_print {
            format!("{}  ", indent)
        } else {
            String::new()
        };
        let nl = self.newline();

        let mut group = format!(
            r#"{indent}<g id="{id}" class="{classes}" transform="{transform}">{nl}"#,
            id = obj.id,
        );
        group.push_str(&format!(
            r#"{inner}<rect class="{prefix}fixture {prefix}{key}" x="{x}" y="{y}" width="{w}" height="{h}"/>{nl}"#,
            key = obj.type_key,
            x = -width / 2.0,
            y = -height / 2.0,
            w = width,
            h = height,
        ));
        group.push_str(&format!(
            r#"{inner}<text class="{prefix}label" x="0" y="{label_y}" text-anchor="middle">{name}</text>{nl}"#,
            label_y = -height / 2.0 - 6.0,
            name = escape_text(&obj.display_name),
        ));
        group.push_str(&format!("{indent}</g>"));
        self.elements.push(group);
    }

    /// Assemble the final SVG document.
    pub fn build(self, grid: &Grid) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = grid.canvas_width,
            h = grid.canvas_height,
        ));
        svg.push_str(nl);

        for line in &self.grid_lines {
            svg.push_str(line);
            svg.push_str(nl);
        }
        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

/// Escape text content for SVG
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the editor's live state to an SVG document.
pub fn render_svg(editor: &LayoutEditor, config: &SvgConfig) -> String {
    let grid = editor.grid();
    let mut builder = SvgBuilder::new(config.clone());

    if config.show_grid {
        builder.add_grid(&grid);
    }
    for obj in editor.objects() {
        let selected = editor.selected_id() == Some(&obj.id);
        builder.add_object(obj, editor.catalog(), selected);
    }
    builder.build(&grid)
}
