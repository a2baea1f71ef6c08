//! Catalogue port: id-keyed storage for projects.

use crate::error::ErrorKind;
use crate::project::domain::{Project, ProjectId, ProjectStatus};
use thiserror::Error;

/// Result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Project storage.
pub trait ProjectCatalogue {
    /// Stores a newly registered project.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateProject`] when the number is taken.
    fn store(&mut self, project: Project) -> CatalogueResult<()>;

    /// Finds a project by number.
    fn get(&self, id: ProjectId) -> Option<&Project>;

    /// Finds a project by number for mutation.
    fn get_mut(&mut self, id: ProjectId) -> Option<&mut Project>;

    /// Returns every project ordered by number.
    fn list(&self) -> Vec<&Project>;

    /// Returns the projects in `status` ordered by number.
    fn list_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.list()
            .into_iter()
            .filter(|project| project.status() == status)
            .collect()
    }
}

/// Errors returned by catalogue implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// A project with the same number is already stored.
    #[error("duplicate project number: {0}")]
    DuplicateProject(ProjectId),
}

impl CatalogueError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateProject(_) => ErrorKind::StateConflict,
        }
    }
}
