//! Mind-map tree and its serialized forms.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Text of the fixed outline shown when no sentences could be derived.
pub(crate) const EMPTY_NOTICE: &str = "No readable text found in image";

/// Root text of the fixed outline shown when map assembly faulted.
pub(crate) const FAILURE_NOTICE: &str = "Error creating mind map";

/// Detail line of the failure outline.
pub(crate) const FAILURE_HINT: &str = "Please try again with clearer text";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A hierarchical mind map derived from recognized text.
///
/// The tree has at most three levels: the root topic, up to five subtopic
/// branches, and up to two related points per branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMap {
    /// Main topic (the first derived sentence, verbatim)
    pub root: String,

    /// Subtopic branches in rank order
    pub branches: Vec<Branch>,
}

/// A subtopic with its supporting points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Capitalized subtopic word
    pub label: String,

    /// Truncated sentences mentioning the subtopic, in source order
    pub points: Vec<String>,
}

impl Branch {
    /// Create a branch with no points.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }
}

impl MindMap {
    /// Create a map with the given root topic and no branches.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            branches: Vec::new(),
        }
    }

    /// Fixed map rendered when the input contained no readable text.
    pub fn empty_notice() -> Self {
        Self::new(EMPTY_NOTICE)
    }

    /// Fixed map rendered when assembly failed unexpectedly.
    pub fn failure_notice() -> Self {
        let mut map = Self::new(FAILURE_NOTICE);
        map.branches.push(Branch::new(FAILURE_HINT));
        map
    }

    /// Whether this is one of the fixed degraded maps.
    pub fn is_degraded(&self) -> bool {
        self.root == EMPTY_NOTICE || self.root == FAILURE_NOTICE
    }

    /// Add a branch to the map.
    pub fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    /// Total number of nodes in the tree (root included).
    pub fn node_count(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|b| 1 + b.points.len())
            .sum::<usize>()
    }

    /// Render the map as an indented bulleted outline.
    ///
    /// Three indentation levels are used: `- ` for the root, `  - ` for
    /// branches, and `    - ` for points. Lines are joined with `\n`.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.node_count());
        lines.push(format!("- {}", self.root));
        for branch in &self.branches {
            lines.push(format!("  - {}", branch.label));
            for point in &branch.points {
                lines.push(format!("    - {}", point));
            }
        }
        lines.join("\n")
    }

    /// Serialize the map to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}
