//! Operation: display the dependency tree.

use std::path::{Path, PathBuf};

use versolve_resolver::graph::DependencyGraph;
use versolve_util::errors::VersolveResult;

use crate::project::{resolve_project, Project};

/// Options for `versolve tree`.
#[derive(Default)]
pub struct TreeOptions {
    pub index: Option<PathBuf>,
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show the path from the project to this package.
    pub why: Option<String>,
    /// Show what depends on this package.
    pub inverted: Option<String>,
    pub verbose: bool,
}

/// Display the dependency tree for the project.
pub fn tree(manifest_path: &Path, opts: &TreeOptions) -> VersolveResult<()> {
    let project = Project::load(manifest_path)?;
    let resolution = resolve_project(&project, opts.index.as_deref(), opts.verbose)?;
    let graph = DependencyGraph::from_tree(
        project.name(),
        &project.manifest.project.version,
        &resolution.tree,
    );

    if let Some(ref target) = opts.why {
        if let Some(path) = graph.find_path(target) {
            println!("Path to {target}:");
            for (i, node) in path.iter().enumerate() {
                let indent = "  ".repeat(i);
                println!("{indent}{node}");
            }
        } else {
            println!("Package '{target}' not found in the graph.");
        }
        return Ok(());
    }

    if let Some(ref target) = opts.inverted {
        let inverted_output = graph.print_inverted_tree(target);
        if inverted_output.is_empty() {
            println!("Package '{target}' not found in the graph.");
        } else {
            print!("{inverted_output}");
        }
        return Ok(());
    }

    print!("{}", graph.print_tree(opts.depth));
    Ok(())
}
