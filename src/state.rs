//! Selection state and its click-driven transitions.

use crate::catalog::Catalog;

/// Which category is expanded and which project is shown. The project
/// field is only ever set while its category is the open one; every
/// category change clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub open_category: Option<String>,
    pub selected_project: Option<String>,
}

/// A navigation click, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    Category(String),
    Project { category: String, project: String },
    Home,
}

impl Selection {
    /// Validates raw ids against the catalog: an unknown category resolves
    /// to nothing open, and a project only survives when it exists inside
    /// the open category. Misses are silent, never errors.
    pub fn resolve(
        catalog: &Catalog,
        category_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Selection {
        let category = match category_id.and_then(|id| catalog.find_category(id)) {
            Some(c) => c,
            None => return Selection::default(),
        };
        let selected = project_id
            .and_then(|id| category.find_project(id))
            .map(|p| p.id.clone());
        Selection {
            open_category: Some(category.id.clone()),
            selected_project: selected,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open_category.is_none()
    }
}

/// The single transition function for navigation clicks. Pure: the caller
/// re-resolves the result against the catalog and writes the fragment.
pub fn transition(current: &Selection, click: &Click) -> Selection {
    match click {
        // Clicking the already-open category toggles it closed.
        Click::Category(id) if current.open_category.as_deref() == Some(id.as_str()) => {
            Selection::default()
        }
        Click::Category(id) => Selection {
            open_category: Some(id.clone()),
            selected_project: None,
        },
        // Selecting a project implicitly opens its category.
        Click::Project { category, project } => Selection {
            open_category: Some(category.clone()),
            selected_project: Some(project.clone()),
        },
        Click::Home => Selection::default(),
    }
}
