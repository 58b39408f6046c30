//! List command implementation

use anyhow::{Context, Result};
use colored::*;

use crate::app::AppConfig;
use crate::config::{self, ProjectDefinition};

pub async fn run_list_command(config: &AppConfig) -> Result<()> {
    let project = config::load_from_file(&config.config_path)
        .await
        .context("failed to load config from file")?;
    print!("{}", render_task_list(&project));
    Ok(())
}

/// One line per task: name, category, description and step count.
pub fn render_task_list(project: &ProjectDefinition) -> String {
    if project.tasks.is_empty() {
        return format!("No tasks defined for {}.\n", project.display_name());
    }

    let width = project.tasks.keys().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for (name, task) in &project.tasks {
        let category = task
            .category
            .as_deref()
            .map(|c| format!("[{c}] "))
            .unwrap_or_default();
        let description = task.description.as_deref().unwrap_or("");
        out.push_str(&format!(
            "  {:<width$}  {}{} ({} step{})\n",
            name.cyan(),
            category.dimmed(),
            description,
            task.operation.steps.len(),
            if task.operation.steps.len() == 1 { "" } else { "s" },
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_task_list() {
        colored::control::set_override(false);
        let project = config::load(
            r#"
tasks:
  test:
    description: Run unit tests
    category: ci
    steps: [ "cargo test" ]
  fmt:
    steps: [ "cargo fmt", "cargo clippy" ]
"#
            .as_bytes(),
        )
        .unwrap();

        let rendered = render_task_list(&project);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  fmt"));
        assert!(lines[0].ends_with("(2 steps)"));
        assert!(lines[1].contains("[ci] Run unit tests (1 step)"));
    }

    #[test]
    fn test_render_empty_task_list() {
        let project = ProjectDefinition {
            name: Some("demo".into()),
            ..ProjectDefinition::default()
        };
        assert_eq!(render_task_list(&project), "No tasks defined for demo.\n");
    }
}
