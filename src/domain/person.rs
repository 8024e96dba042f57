use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DomainError, Result};
use crate::ports::Department;

/// A person with a name and an optional department assignment
///
/// `D` is the department handle type the embedding system chooses; anything
/// implementing [`Department`] works, including borrowed references and
/// `Rc`/`Arc` handles to departments owned elsewhere. The name is fixed at
/// construction and the department link starts out unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person<D> {
    name: String,
    department: Option<D>,
}

impl<D> Person<D> {
    /// Create a person with the given name and no department assigned
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: None,
        }
    }

    /// The person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a department, replacing any previous assignment
    pub fn set_department(&mut self, department: D) {
        debug!("Department assigned: {}", self.name);
        self.department = Some(department);
    }

    /// Detach the current department, if any
    pub fn clear_department(&mut self) {
        debug!("Department cleared: {}", self.name);
        self.department = None;
    }
}

impl<D: Department> Person<D> {
    /// Manager of the currently attached department
    ///
    /// Errors when no department has been assigned or it has been cleared;
    /// propagation is the caller's responsibility.
    pub fn manager(&self) -> Result<D::Manager> {
        match &self.department {
            Some(department) => Ok(department.manager()),
            None => {
                warn!("Manager read with no department assigned: {}", self.name);
                Err(DomainError::DepartmentUnset {
                    person: self.name.clone(),
                })
            }
        }
    }
}

impl<D> std::fmt::Display for Person<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
