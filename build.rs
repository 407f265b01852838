use std::collections::HashSet;
use std::path::Path;

const SHAPES: [&str; 3] = ["Square", "Horizontal", "Vertical"];
const ENTRIES: [&str; 3] = ["Left", "Center", "Right"];
const STORAGES: [&str; 9] = [
    "Top Left",
    "Top Center",
    "Top Right",
    "Left Top",
    "Left Center",
    "Left Bottom",
    "Right Top",
    "Right Center",
    "Right Bottom",
];

fn main() {
    let catalog_path = Path::new("catalogs/layouts.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let layouts = catalog.get("layouts").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'layouts' field\n\
             The catalog must have a top-level 'layouts' array.\n"
        );
    });

    let layouts = layouts.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'layouts' must be an array\n\
             Got: {layouts}\n"
        );
    });

    let mut seen = HashSet::new();
    for (i, layout) in layouts.iter().enumerate() {
        let id = validate_layout_fields(layout, i);
        assert!(
            seen.insert(id),
            "\n\nCATALOG BUILD ERROR: Duplicate layout id {id} (index {i})\n"
        );
    }

    println!(
        "cargo:warning=Validated catalog: {} layouts ({} with mirrored twins)",
        layouts.len(),
        layouts.len() * 2
    );
}

fn validate_layout_fields(layout: &serde_json::Value, index: usize) -> u64 {
    let id = layout
        .get("id")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Layout at index {index} missing numeric 'id' field\n")
        });

    // Mirrored twins take id + 1000
    assert!(
        (1..1000).contains(&id),
        "\n\nCATALOG BUILD ERROR: Layout {id} (index {index}) must have an id in 1..1000\n"
    );

    let area = layout
        .get("area")
        .and_then(serde_json::Value::as_f64)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Layout {id} (index {index}) missing 'area' field\n")
        });
    assert!(
        area > 0.0,
        "\n\nCATALOG BUILD ERROR: Layout {id} has non-positive area\n"
    );

    validate_enum_field(layout, "shape", &SHAPES, id);
    validate_enum_field(layout, "entry", &ENTRIES, id);
    validate_enum_field(layout, "storage", &STORAGES, id);

    id
}

fn validate_enum_field(layout: &serde_json::Value, field: &str, allowed: &[&str], id: u64) {
    let value = layout.get(field).and_then(|v| v.as_str()).unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: Layout {id} missing '{field}' field\n")
    });
    assert!(
        allowed.contains(&value),
        "\n\nCATALOG BUILD ERROR: Layout {id} has unknown {field} '{value}'\n\
         Allowed: {allowed:?}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/layouts.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
