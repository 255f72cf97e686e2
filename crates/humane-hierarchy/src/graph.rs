//! Whole-snapshot diagnostics for the habit hierarchy.
//!
//! Nothing here feeds the completion math; it answers "how healthy is this
//! habit set" for the `humane graph` command and for callers that want
//! data-quality numbers the engine itself never reports.

use std::collections::{HashMap, HashSet};

use humane_core::entities::Habit;
use rustworkx_core::connectivity::connected_components;
use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which side of a link a reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    ChildIds,
    ParentIds,
}

/// A reference to a habit that is not in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DanglingReference {
    pub habit_id: String,
    pub field: LinkField,
    pub missing_id: String,
}

/// A tag/child link recorded on only one of its two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OneSidedLink {
    pub parent_id: String,
    pub child_id: String,
    /// The side the link is recorded on.
    pub recorded_in: LinkField,
}

/// Health summary over a habit snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphAnalysis {
    pub node_count: usize,
    pub edge_count: usize,
    pub components: usize,
    pub has_cycles: bool,
    /// Parents before children; `None` when the graph has a cycle.
    pub topological_order: Option<Vec<String>>,
    pub dangling: Vec<DanglingReference>,
    pub one_sided_links: Vec<OneSidedLink>,
    /// Raw habits that nevertheless carry `childIds`.
    pub raw_with_children: Vec<String>,
}

/// Directed parent → child graph over every link named on either side.
pub struct HabitGraph<'a> {
    graph: DiGraph<&'a str, ()>,
    habits: &'a [Habit],
}

impl<'a> HabitGraph<'a> {
    /// Build the graph. Links to ids absent from `habits` are left out.
    #[must_use]
    pub fn from_habits(habits: &'a [Habit]) -> Self {
        let mut graph = DiGraph::new();
        let mut id_to_index: HashMap<&str, NodeIndex> = HashMap::new();

        for habit in habits {
            id_to_index
                .entry(habit.id.as_str())
                .or_insert_with(|| graph.add_node(habit.id.as_str()));
        }

        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        for (parent_id, child_id) in links(habits) {
            let (Some(&parent), Some(&child)) =
                (id_to_index.get(parent_id), id_to_index.get(child_id))
            else {
                continue;
            };
            if seen.insert((parent, child)) {
                graph.add_edge(parent, child, ());
            }
        }

        Self { graph, habits }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Topological ordering of habit ids, parents first.
    #[must_use]
    pub fn toposort(&self) -> Option<Vec<String>> {
        let sorted = toposort(&self.graph, None).ok()?;
        Some(
            sorted
                .into_iter()
                .map(|idx| self.graph[idx].to_string())
                .collect(),
        )
    }

    /// Whether any habit is (transitively) its own ancestor.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    /// Weakly connected component count.
    #[must_use]
    pub fn connected_components(&self) -> usize {
        connected_components(&self.graph).len()
    }

    /// References in `childIds`/`parentIds` to habits not in the snapshot.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let known: HashSet<&str> = self.habits.iter().map(|habit| habit.id.as_str()).collect();
        let mut dangling = Vec::new();

        for habit in self.habits {
            let fields = [
                (LinkField::ChildIds, &habit.child_ids),
                (LinkField::ParentIds, &habit.parent_ids),
            ];
            for (field, ids) in fields {
                dangling.extend(
                    ids.iter()
                        .filter(|id| !known.contains(id.as_str()))
                        .map(|id| DanglingReference {
                            habit_id: habit.id.clone(),
                            field,
                            missing_id: id.clone(),
                        }),
                );
            }
        }
        dangling
    }

    /// Links between two present habits that only one of them records.
    #[must_use]
    pub fn one_sided_links(&self) -> Vec<OneSidedLink> {
        let by_id: HashMap<&str, &Habit> = self
            .habits
            .iter()
            .map(|habit| (habit.id.as_str(), habit))
            .collect();
        let mut found = Vec::new();

        for habit in self.habits {
            for child_id in &habit.child_ids {
                if by_id
                    .get(child_id.as_str())
                    .is_some_and(|child| !child.has_parent(&habit.id))
                {
                    found.push(OneSidedLink {
                        parent_id: habit.id.clone(),
                        child_id: child_id.clone(),
                        recorded_in: LinkField::ChildIds,
                    });
                }
            }
            for parent_id in &habit.parent_ids {
                if by_id
                    .get(parent_id.as_str())
                    .is_some_and(|parent| !parent.has_child(&habit.id))
                {
                    found.push(OneSidedLink {
                        parent_id: parent_id.clone(),
                        child_id: habit.id.clone(),
                        recorded_in: LinkField::ParentIds,
                    });
                }
            }
        }
        found
    }

    /// Aggregate analysis.
    #[must_use]
    pub fn analyze(&self) -> GraphAnalysis {
        let topological_order = self.toposort();
        GraphAnalysis {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            components: self.connected_components(),
            has_cycles: topological_order.is_none(),
            topological_order,
            dangling: self.dangling_references(),
            one_sided_links: self.one_sided_links(),
            raw_with_children: self
                .habits
                .iter()
                .filter(|habit| !habit.is_tag() && !habit.child_ids.is_empty())
                .map(|habit| habit.id.clone())
                .collect(),
        }
    }
}

/// Every (parent, child) pair named by either side.
fn links(habits: &[Habit]) -> impl Iterator<Item = (&str, &str)> {
    habits.iter().flat_map(|habit| {
        let down = habit
            .child_ids
            .iter()
            .map(move |child| (habit.id.as_str(), child.as_str()));
        let up = habit
            .parent_ids
            .iter()
            .map(move |parent| (parent.as_str(), habit.id.as_str()));
        down.chain(up)
    })
}
