use serde::Deserialize;
use std::fmt;

/// One command of an operation, with an optional argument string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "StepDefinition")]
pub struct Step {
    command: String,
    args: Option<String>,
}

/// Accepted YAML shapes: a bare string, or a `cmd`/`command` map with `args`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StepDefinition {
    Line(String),
    Full {
        #[serde(alias = "cmd")]
        command: String,
        #[serde(default, deserialize_with = "super::scalar::deserialize_optional_string")]
        args: Option<String>,
    },
}

impl From<StepDefinition> for Step {
    fn from(def: StepDefinition) -> Self {
        match def {
            StepDefinition::Line(command) => Step::new(command, None::<String>),
            StepDefinition::Full { command, args } => Step::new(command, args),
        }
    }
}

impl Step {
    pub fn new(command: impl Into<String>, args: Option<impl Into<String>>) -> Self {
        let args: Option<String> = args.map(Into::into);
        let args = args.filter(|a| !a.trim().is_empty());
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }

    /// Command followed by its arguments; names the step in reports and is
    /// the command line handed to the shell.
    pub fn identifier(&self) -> String {
        match &self.args {
            Some(args) => format!("{} {}", self.command, args),
            None => self.command.clone(),
        }
    }
}

impl From<&str> for Step {
    fn from(command: &str) -> Self {
        Step::new(command, None::<String>)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}
