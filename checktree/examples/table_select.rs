//! Table Selection Example
//!
//! Drives a CheckTree the way a tree table would:
//! - Rows built from a flat list with parent ids
//! - Controlled selection derived from a key list
//! - Row and header checkbox clicks
//!
//! Log output goes to `table_select.log`.

use std::fs::File;

use checktree::prelude::*;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

// =============================================================================
// Rows
// =============================================================================

/// (id, name, parent id)
const DEPARTMENTS: &[(&str, &str, Option<&str>)] = &[
    ("1", "Engineering", None),
    ("11", "Platform", Some("1")),
    ("111", "Storage", Some("11")),
    ("112", "Networking", Some("11")),
    ("113", "Compute", Some("11")),
    ("12", "Mobile", Some("1")),
    ("13", "Web", Some("1")),
    ("14", "QA", Some("1")),
    ("2", "Sales", None),
    ("3", "Support", None),
    ("4", "Finance", None),
];

#[derive(Clone, Debug)]
struct Department {
    id: String,
    name: String,
    children: Vec<Department>,
}

impl TreeRecord for Department {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

fn build_tree(rows: &[(&str, &str, Option<&str>)], parent: Option<&str>) -> Vec<Department> {
    rows.iter()
        .filter(|(_, _, parent_id)| *parent_id == parent)
        .map(|&(id, name, _)| Department {
            id: id.to_string(),
            name: name.to_string(),
            children: build_tree(rows, Some(id)),
        })
        .collect()
}

// =============================================================================
// Rendering
// =============================================================================

fn render(title: &str, engine: &CheckTree<Department, String>, tree: &[Department]) {
    println!("== {title}");
    render_level(engine, tree, 0);
    println!();
}

fn render_level(engine: &CheckTree<Department, String>, level: &[Department], depth: usize) {
    for row in level {
        let glyph = engine.state(&row.id).unwrap_or_default().glyph();
        println!("{}{} {}", "  ".repeat(depth), glyph, row.name);
        render_level(engine, &row.children, depth + 1);
    }
}

fn run(engine: &mut CheckTree<Department, String>, tree: &[Department]) -> checktree::Result<()> {
    let controlled: Vec<String> = ["111", "112", "113", "4"]
        .iter()
        .map(|id| id.to_string())
        .collect();

    engine.derive_state(tree, &controlled)?;
    render("controlled selection", engine, tree);

    let keys = engine.toggle_node(tree, &"12".to_string(), true)?.into_keys();
    info!("Checked Mobile, {} rows selected", keys.len());
    render("checked Mobile", engine, tree);

    engine.toggle_node(tree, &"11".to_string(), false)?;
    render("unchecked Platform", engine, tree);

    let selected = engine.toggle_all(tree, true)?;
    for (key, row) in selected.iter() {
        info!("Selected {} ({})", row.name, key);
    }
    render("select all", engine, tree);

    let selected = engine.toggle_all(tree, false)?;
    render("deselect all", engine, tree);
    assert!(selected.is_empty());

    Ok(())
}

fn main() {
    let log_file = File::create("table_select.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let tree = build_tree(DEPARTMENTS, None);
    let config = CheckTreeConfig::new(|row: &Department| row.id.clone())
        .name("Departments")
        .on_change(|keys, rows| {
            info!("Selection changed: {:?}", keys);
            let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
            println!("selected: [{}]", names.join(", "));
        });
    let mut engine = CheckTree::with_config(config);

    if let Err(e) = run(&mut engine, &tree) {
        eprintln!("Error: {}", e);
    }
}
