//! Dependency graph built from a resolved tree, for display and path queries.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::resolver::DependencyTree;

/// A package at its selected version.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PackageNode {
    pub name: String,
    pub version: String,
}

impl fmt::Display for PackageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// The resolved dependency graph. Each package appears once, since a
/// resolution selects exactly one version per package.
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, ()>,
    /// Package name to node index.
    index: HashMap<String, NodeIndex>,
    pub root: Option<NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            root: None,
        }
    }

    /// Build the graph for `project` (at `version`) from a resolved tree.
    pub fn from_tree(project: &str, version: &str, tree: &DependencyTree) -> Self {
        let mut g = Self::new();
        let root = g.add_node(PackageNode {
            name: project.to_string(),
            version: version.to_string(),
        });
        g.set_root(root);
        g.attach(root, tree);
        g
    }

    fn attach(&mut self, parent: NodeIndex, tree: &DependencyTree) {
        for (name, node) in tree {
            let idx = self.add_node(PackageNode {
                name: name.clone(),
                version: node.version.clone(),
            });
            self.add_edge(parent, idx);
            self.attach(idx, &node.dependencies);
        }
    }

    /// Add or retrieve a node. If the name already exists, returns the existing index.
    pub fn add_node(&mut self, node: PackageNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.name) {
            return idx;
        }
        let name = node.name.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(name, idx);
        idx
    }

    pub fn set_root(&mut self, idx: NodeIndex) {
        self.root = Some(idx);
    }

    /// Add a dependency edge from `from` to `to`, once.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &PackageNode {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, in the order they were placed.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks edges newest first
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.target())
            .collect();
        deps.reverse();
        deps
    }

    /// Who depends on this node.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut deps: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        deps.reverse();
        deps
    }

    /// Render the tree below the root, down to `max_depth` levels if given.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let Some(root) = self.root else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[root]));

        let mut visited = HashSet::new();
        visited.insert(root);
        let deps = self.dependencies_of(root);
        let count = deps.len();
        for (i, idx) in deps.iter().enumerate() {
            self.print_subtree(
                &mut output,
                *idx,
                "",
                i == count - 1,
                1,
                max_depth,
                &mut visited,
            );
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", self.graph[idx]));

        if max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.iter().enumerate() {
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                i == count - 1,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// The chain of packages from the root down to `name`.
    pub fn find_path(&self, name: &str) -> Option<Vec<&PackageNode>> {
        let root = self.root?;
        let target = self.find(name)?;
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        if self.dfs_path(root, target, &mut path, &mut visited) {
            Some(path.iter().map(|&idx| &self.graph[idx]).collect())
        } else {
            None
        }
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            path.pop();
            return false;
        }
        for next in self.dependencies_of(current) {
            if self.dfs_path(next, target, path, visited) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Render who pulls in `name`, walking reverse edges up to the root.
    pub fn print_inverted_tree(&self, name: &str) -> String {
        let mut output = String::new();
        let Some(idx) = self.find(name) else {
            return output;
        };

        output.push_str(&format!("{}\n", self.graph[idx]));

        let mut visited = HashSet::new();
        visited.insert(idx);
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.iter().enumerate() {
            self.print_inverted_subtree(&mut output, *dep_idx, "", i == count - 1, &mut visited);
        }
        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{}\n", self.graph[idx]));

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep_idx) in dependents.iter().enumerate() {
            self.print_inverted_subtree(output, *dep_idx, &child_prefix, i == count - 1, visited);
        }

        visited.remove(&idx);
    }

    /// Number of packages (excluding root).
    pub fn len(&self) -> usize {
        let total = self.graph.node_count();
        if self.root.is_some() {
            total.saturating_sub(1)
        } else {
            total
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
