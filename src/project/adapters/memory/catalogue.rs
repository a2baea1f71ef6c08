//! In-memory project catalogue.

use std::collections::BTreeMap;

use crate::project::{
    domain::{Project, ProjectId},
    ports::{CatalogueError, CatalogueResult, ProjectCatalogue},
};

/// Catalogue backed by an ordered map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectCatalogue {
    projects: BTreeMap<ProjectId, Project>,
}

impl InMemoryProjectCatalogue {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when no project is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectCatalogue for InMemoryProjectCatalogue {
    fn store(&mut self, project: Project) -> CatalogueResult<()> {
        if self.projects.contains_key(&project.id()) {
            return Err(CatalogueError::DuplicateProject(project.id()));
        }
        self.projects.insert(project.id(), project);
        Ok(())
    }

    fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    fn get_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.get_mut(&id)
    }

    fn list(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }
}
