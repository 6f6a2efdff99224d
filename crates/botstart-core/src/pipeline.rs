//! Pipelines of build tool targets.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Invalid action name `{name}`: {reason}")]
    InvalidAction { name: String, reason: &'static str },
}

/// A build tool target name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action(String);

impl Action {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Action {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| PipelineError::InvalidAction {
            name: s.into(),
            reason,
        };

        if s.is_empty() {
            Err(invalid("empty name"))
        } else if s.starts_with('-') {
            Err(invalid("names cannot start with `-`"))
        } else if s.chars().any(char::is_whitespace) {
            Err(invalid("names cannot contain whitespace"))
        } else {
            Ok(Self(s.into()))
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named, ordered list of actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    name: String,
    actions: Vec<Action>,
}

impl Pipeline {
    pub fn new<T: Into<String>>(name: T, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// Install dependencies, set up the database, then run the bot.
    pub fn install() -> Self {
        Self::from_static("install", &["install", "setup-db", "run"])
    }

    /// Set up the database, then run the bot.
    pub fn start() -> Self {
        Self::from_static("start", &["setup-db", "run"])
    }

    /// Built-in pipelines.
    pub fn presets() -> Vec<Self> {
        vec![Self::install(), Self::start()]
    }

    fn from_static(name: &str, actions: &[&'static str]) -> Self {
        Self::new(
            name,
            actions.iter().map(|a| Action(a.to_string())).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actions: Vec<&str> = self.actions.iter().map(Action::name).collect();
        write!(f, "{}: {}", self.name, actions.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(pipeline: &Pipeline) -> Vec<&str> {
        pipeline.actions().iter().map(Action::name).collect()
    }

    #[test]
    fn presets() {
        assert_eq!(names(&Pipeline::install()), vec!["install", "setup-db", "run"]);
        assert_eq!(names(&Pipeline::start()), vec!["setup-db", "run"]);
        assert_eq!(
            Pipeline::install().to_string(),
            "install: install -> setup-db -> run"
        );
    }

    #[test]
    fn parse_action() {
        assert_eq!(Action::from_str("setup-db").unwrap().name(), "setup-db");
        assert_eq!(
            Action::from_str("--always-make"),
            Err(PipelineError::InvalidAction {
                name: "--always-make".into(),
                reason: "names cannot start with `-`"
            })
        );
        assert!(Action::from_str("").is_err());
        assert!(Action::from_str("setup db").is_err());
    }
}
