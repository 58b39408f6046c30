use serde::Deserialize;
use std::collections::BTreeMap;

use crate::operation::Operation;

/// Root of a `.opsrunner.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub codebase: Option<Codebase>,
    #[serde(default)]
    pub tasks: BTreeMap<String, Task>,
}

impl ProjectDefinition {
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

/// Language-aware install/build/test operations of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Codebase {
    #[serde(default)]
    pub language: Option<String>,
    /// Dependency manifest, e.g. `requirements.txt` for Python.
    #[serde(default)]
    pub dependencies: Option<String>,
    #[serde(default)]
    pub install: Option<Operation>,
    #[serde(default)]
    pub build: Operation,
    #[serde(default)]
    pub test: Operation,
}

/// A named operation with optional descriptive metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub operation: Operation,
}
