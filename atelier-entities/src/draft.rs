use crate::portfolio::{array_move, ALL_CATEGORY};
use crate::{PortfolioData, Project};

/// The admin's working copy of the document.
///
/// Every edit lands here, never on the committed model; the whole draft is
/// handed to the store in one commit step. Dropping the draft discards the
/// edits, which is the only cancel path.
#[derive(Clone, Debug)]
pub struct Draft {
    pub data: PortfolioData,
}

impl From<PortfolioData> for Draft {
    fn from(data: PortfolioData) -> Self {
        Self { data }
    }
}

impl Draft {
    pub fn from_committed(committed: &PortfolioData) -> Self {
        Self {
            data: committed.clone(),
        }
    }

    /// Append a placeholder section name for the owner to rename.
    pub fn add_category(&mut self) {
        self.data
            .categories
            .push("New Section".to_string());
    }

    /// Rename the category at `idx`. The reserved entry is immutable;
    /// returns whether the rename was applied.
    pub fn rename_category(&mut self, idx: usize, name: String) -> bool {
        match self.data.categories.get_mut(idx) {
            Some(category) if category != ALL_CATEGORY => {
                *category = name;
                true
            }
            _ => false,
        }
    }

    /// Remove the category at `idx`. The reserved entry stays; projects
    /// already assigned to the removed category are left untouched.
    pub fn remove_category(&mut self, idx: usize) -> bool {
        match self.data.categories.get(idx) {
            Some(category) if category != ALL_CATEGORY => {
                self.data.categories.remove(idx);
                true
            }
            _ => false,
        }
    }

    pub fn new_project(&self, now_millis: i64) -> Project {
        Project::with_defaults(&self.data.categories, now_millis)
    }

    /// Replace the project with a matching id, or prepend when new.
    pub fn upsert_project(&mut self, project: Project) {
        match self
            .data
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
        {
            Some(existing) => *existing = project,
            None => self.data.projects.insert(0, project),
        }
    }

    pub fn remove_project(&mut self, id: &str) {
        self.data.projects.retain(|p| p.id != id);
    }

    /// Reorder within the full backing list (never a filtered view).
    pub fn move_project(&mut self, from: usize, to: usize) {
        array_move(&mut self.data.projects, from, to);
    }

    /// Categories a project may be assigned to.
    pub fn assignable_categories(&self) -> Vec<&str> {
        self.data
            .categories
            .iter()
            .map(String::as_str)
            .filter(|c| *c != ALL_CATEGORY)
            .collect()
    }
}
