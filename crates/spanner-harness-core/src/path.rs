//! Resource paths understood by the administration service.

use crate::{Error, Result};

use std::fmt;

/// Project used by every test run.
pub const TEST_PROJECT: &str = "testing-project";

/// Instance shared by every test run.
pub const TEST_INSTANCE: &str = "testing-instance";

/// `projects/{project}/instances/{instance}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstancePath {
    project: String,
    instance: String,
}

/// `projects/{project}/instances/{instance}/databases/{database}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabasePath {
    instance: InstancePath,
    database: String,
}

impl InstancePath {
    pub fn new(project: impl Into<String>, instance: impl Into<String>) -> InstancePath {
        InstancePath {
            project: project.into(),
            instance: instance.into(),
        }
    }

    /// The fixed instance used by the test environment.
    pub fn testing() -> InstancePath {
        InstancePath::new(TEST_PROJECT, TEST_INSTANCE)
    }

    pub fn project_id(&self) -> &str {
        &self.project
    }

    pub fn instance_id(&self) -> &str {
        &self.instance
    }

    /// `projects/{project}`, the parent of the instance.
    pub fn project_path(&self) -> String {
        format!("projects/{}", self.project)
    }

    pub fn database(&self, database: impl Into<String>) -> DatabasePath {
        DatabasePath {
            instance: self.clone(),
            database: database.into(),
        }
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/instances/{}", self.project, self.instance)
    }
}

impl DatabasePath {
    /// Parses a fully qualified database resource name.
    pub fn parse(name: &str) -> Result<DatabasePath> {
        let parts: Vec<&str> = name.split('/').collect();

        match parts[..] {
            ["projects", project, "instances", instance, "databases", database]
                if !project.is_empty() && !instance.is_empty() && !database.is_empty() =>
            {
                Ok(InstancePath::new(project, instance).database(database))
            }
            _ => Err(Error::invalid_result(format!(
                "malformed database resource name; name={name}"
            ))),
        }
    }

    pub fn instance(&self) -> &InstancePath {
        &self.instance
    }

    /// The last path segment.
    pub fn database_id(&self) -> &str {
        &self.database
    }
}

impl fmt::Display for DatabasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/databases/{}", self.instance, self.database)
    }
}
