//! Topological ordering of self-referencing rows.
//!
//! Tables whose rows point at a parent row in the same table (the locality
//! table's sub-locality pointer) must be inserted parents-first. This module
//! orders such a row set with Kahn's algorithm over an explicit adjacency
//! map: the first column of each row is its identifying key, the
//! self-referencing column holds the parent key.

use crate::error::{LoaderError, Result};
use crate::writer::loader::Value;
use std::collections::{HashMap, HashSet, VecDeque};

/// Sort `rows` so every row appears after the row its parent key points to.
///
/// A NULL parent, or a parent key absent from the row set, imposes no
/// ordering constraint. Ties keep first-seen order. Fails with
/// [`LoaderError::Cycle`] if any row transitively depends on itself.
pub(crate) fn sort_self_referencing(
    mut rows: Vec<Vec<Value>>,
    parent_index: usize,
    table: &str,
) -> Result<Vec<Vec<Value>>> {
    // Keys in first-seen order, with the set of parents each key depends on.
    let mut seen_order: Vec<Value> = Vec::new();
    let mut parents: HashMap<Value, HashSet<Value>> = HashMap::new();

    for row in &rows {
        let key = row[0].clone();
        let parent = row[parent_index].clone();

        let entry = parents.entry(key.clone()).or_insert_with(|| {
            seen_order.push(key);
            HashSet::new()
        });
        if !parent.is_null() {
            entry.insert(parent);
        }
    }

    // Only parents that exist as keys constrain the ordering.
    let mut indegree: HashMap<&Value, usize> = HashMap::new();
    let mut children: HashMap<&Value, Vec<&Value>> = HashMap::new();

    for key in &seen_order {
        let degree = parents[key]
            .iter()
            .filter(|parent| parents.contains_key(parent))
            .count();
        indegree.insert(key, degree);
        for parent in &parents[key] {
            if parents.contains_key(parent) {
                children.entry(parent).or_default().push(key);
            }
        }
    }

    // Kahn's algorithm, seeded in first-seen order.
    let mut queue: VecDeque<&Value> = seen_order
        .iter()
        .filter(|key| indegree[*key] == 0)
        .collect();
    let mut rank: HashMap<Value, usize> = HashMap::with_capacity(seen_order.len());

    while let Some(key) = queue.pop_front() {
        let next = rank.len();
        rank.insert(key.clone(), next);

        if let Some(deps) = children.get(key) {
            for child in deps {
                let degree = indegree
                    .get_mut(*child)
                    .ok_or_else(|| LoaderError::Cycle(table.to_string()))?;
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(*child);
                }
            }
        }
    }

    if rank.len() != seen_order.len() {
        return Err(LoaderError::Cycle(table.to_string()));
    }

    rows.sort_by_key(|row| rank[&row[0]]);
    Ok(rows)
}
