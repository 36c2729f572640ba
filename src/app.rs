//! The controller: one catalog, one selection, one location, one rendered
//! frame. Clicks mutate the selection, write the fragment, and re-render;
//! an externally changed fragment re-derives the selection instead. State
//! and fragment never drift apart: every state change writes its fragment
//! before the caller regains control.

use crate::catalog::Catalog;
use crate::render::{self, Frame};
use crate::router::{self, Location};
use crate::state::{self, Click, Selection};

pub struct App<'a, L: Location> {
    catalog: &'a Catalog,
    location: L,
    selection: Selection,
    frame: Frame,
}

impl<'a, L: Location> App<'a, L> {
    /// Builds the app and derives the initial selection from whatever
    /// fragment the location already carries (deep links).
    pub fn new(catalog: &'a Catalog, location: L) -> App<'a, L> {
        let mut app = App {
            catalog,
            location,
            selection: Selection::default(),
            frame: Frame::default(),
        };
        app.sync_from_location();
        app
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Re-derives state from the current fragment, at startup and on every
    /// external navigation (back/forward). Never writes the fragment: the
    /// fragment stays the single source of truth for restoration.
    pub fn sync_from_location(&mut self) {
        let fragment = self.location.read();
        let (category, project) = router::parse_fragment(&fragment);
        self.selection = Selection::resolve(self.catalog, category.as_deref(), project.as_deref());
        self.render();
    }

    /// Applies a click: transition, validate against the catalog, write the
    /// canonical fragment, re-render both panes.
    pub fn click(&mut self, click: Click) {
        let next = state::transition(&self.selection, &click);
        self.selection = Selection::resolve(
            self.catalog,
            next.open_category.as_deref(),
            next.selected_project.as_deref(),
        );
        router::set_fragment(
            &mut self.location,
            self.selection.open_category.as_deref(),
            self.selection.selected_project.as_deref(),
        );
        self.render();
    }

    pub fn click_category(&mut self, id: &str) {
        self.click(Click::Category(id.to_string()));
    }

    pub fn click_project(&mut self, category: &str, project: &str) {
        self.click(Click::Project {
            category: category.to_string(),
            project: project.to_string(),
        });
    }

    pub fn click_home(&mut self) {
        self.click(Click::Home);
    }

    fn render(&mut self) {
        self.frame = render::render_frame(self.catalog, &self.selection);
    }
}
