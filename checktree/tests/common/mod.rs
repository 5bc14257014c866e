//! Shared fixtures for checktree integration tests.

#![allow(dead_code)]

use checktree::{CheckTree, TreeRecord};

/// Empty key set.
pub const NONE: &[&str] = &[];

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: &'static str,
    pub children: Vec<Row>,
}

impl Row {
    pub fn leaf(id: &'static str) -> Self {
        Self {
            id,
            children: vec![],
        }
    }

    pub fn node(id: &'static str, children: Vec<Row>) -> Self {
        Self { id, children }
    }
}

impl TreeRecord for Row {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

pub fn engine() -> CheckTree<Row, &'static str> {
    CheckTree::new(|row: &Row| row.id)
}

/// `A(A1, A2(A21, A22))`
pub fn sample() -> Vec<Row> {
    vec![Row::node(
        "A",
        vec![
            Row::leaf("A1"),
            Row::node("A2", vec![Row::leaf("A21"), Row::leaf("A22")]),
        ],
    )]
}

/// `1(11(111, 112, 113), 12, 13, 14), 2, 3, 4`
pub fn forest() -> Vec<Row> {
    vec![
        Row::node(
            "1",
            vec![
                Row::node(
                    "11",
                    vec![Row::leaf("111"), Row::leaf("112"), Row::leaf("113")],
                ),
                Row::leaf("12"),
                Row::leaf("13"),
                Row::leaf("14"),
            ],
        ),
        Row::leaf("2"),
        Row::leaf("3"),
        Row::leaf("4"),
    ]
}

/// A single chain of `depth` rows: `n0(n1(n2(...)))`, keyed by index.
pub fn chain(depth: usize) -> Vec<ChainRow> {
    let mut row = ChainRow {
        id: depth - 1,
        children: vec![],
    };
    for id in (0..depth - 1).rev() {
        row = ChainRow {
            id,
            children: vec![row],
        };
    }
    vec![row]
}

/// Rows nested deeper than the default drop glue can unwind.
#[derive(Debug)]
pub struct ChainRow {
    pub id: usize,
    pub children: Vec<ChainRow>,
}

impl TreeRecord for ChainRow {
    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl Drop for ChainRow {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut row) = pending.pop() {
            pending.append(&mut row.children);
        }
    }
}

pub fn preorder(tree: &[Row]) -> Vec<&Row> {
    let mut rows = Vec::new();
    push_preorder(tree, &mut rows);
    rows
}

fn push_preorder<'t>(level: &'t [Row], rows: &mut Vec<&'t Row>) {
    for row in level {
        rows.push(row);
        push_preorder(&row.children, rows);
    }
}

pub fn keys(tree: &[Row]) -> Vec<&'static str> {
    preorder(tree).into_iter().map(|row| row.id).collect()
}

fn leaves(row: &Row) -> Vec<&'static str> {
    preorder(&row.children)
        .into_iter()
        .filter(|row| row.children.is_empty())
        .map(|row| row.id)
        .collect()
}

/// Assert checked/indeterminate flags agree with the leaves of every row.
pub fn assert_consistent(engine: &CheckTree<Row, &'static str>, tree: &[Row]) {
    for row in preorder(tree) {
        if row.children.is_empty() {
            assert!(
                !engine.is_indeterminate(&row.id),
                "leaf {} is indeterminate",
                row.id
            );
            continue;
        }

        let leaves = leaves(row);
        let checked = leaves.iter().filter(|id| engine.is_checked(id)).count();
        assert_eq!(
            engine.is_checked(&row.id),
            checked == leaves.len(),
            "checked flag of {}",
            row.id
        );
        assert_eq!(
            engine.is_indeterminate(&row.id),
            checked > 0 && checked < leaves.len(),
            "indeterminate flag of {}",
            row.id
        );
    }
}
