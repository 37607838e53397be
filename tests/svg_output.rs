//! Structural checks on rendered SVG output

use floorset::editor::LayoutEditor;
use floorset::{render_svg, SvgConfig};

#[test]
fn empty_canvas_still_renders_grid() {
    let editor = LayoutEditor::default();
    let svg = render_svg(&editor, &SvgConfig::default());
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"viewBox="0 0 1000 700""#));
    // 25 columns + 17 rows plus the closing edge lines.
    assert_eq!(svg.matches("fs-grid").count(), 26 + 18);
}

#[test]
fn objects_render_scaled_from_base_dimensions() {
    let mut editor = LayoutEditor::default();
    editor.add_object("rack"); // 40x80 at scale 1
    editor.enlarge_selected(); // scale 1.25 -> 50x100
    let svg = render_svg(&editor, &SvgConfig::default());
    assert!(svg.contains(r#"width="50" height="100""#));
}

#[test]
fn dangling_type_key_is_skipped_silently() {
    let mut editor = LayoutEditor::default();
    editor.add_object("rack");
    editor.add_object("table");
    editor.remove_fixture("rack", true).unwrap();

    // Re-create a rack-typed object via snapshot load so the collection
    // holds a type the catalog no longer knows.
    let snap = floorset::LayoutSnapshot {
        name: "Mixed".to_string(),
        objects: editor.objects().to_vec(),
        timestamp: chrono::Utc::now(),
    };
    let mut stale = snap.clone();
    stale.objects.push(floorset::editor::PlacedObject::new(
        floorset::editor::ObjectId::from("rack-9"),
        "Ghost rack".to_string(),
        "rack".to_string(),
        40,
        40,
    ));

    editor.load_snapshot(&stale);
    let svg = render_svg(&editor, &SvgConfig::default());
    assert!(!svg.contains("Ghost rack"));
    assert!(svg.contains("Display Table 1"));
}

#[test]
fn compact_output_has_no_newlines() {
    let mut editor = LayoutEditor::default();
    editor.add_object("chair");
    let svg = render_svg(
        &editor,
        &SvgConfig::default()
            .with_pretty_print(false)
            .with_standalone(false),
    );
    assert!(!svg.contains('\n'));
    assert!(svg.starts_with("<svg"));
}

#[test]
fn class_prefix_is_configurable() {
    let mut editor = LayoutEditor::default();
    editor.add_object("rack");
    let svg = render_svg(
        &editor,
        &SvgConfig::default().with_class_prefix(Some("plan-".to_string())),
    );
    assert!(svg.contains("plan-object"));
    assert!(!svg.contains("fs-object"));
}
