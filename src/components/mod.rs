//! UI Components
//!
//! Leptos components for the planner views.

mod editable_list;
mod empty;
mod form_page;
mod home;
mod loader;
mod menu;
mod navbar;
mod project_list;
mod results;
mod single_project;
mod timelines;
mod tutorial;

pub use editable_list::EditableList;
pub use empty::Empty;
pub use form_page::FormPage;
pub use home::Home;
pub use loader::{Loader, Spinner};
pub use menu::Menu;
pub use navbar::Navbar;
pub use project_list::ProjectList;
pub use results::{Results, ResultsKind};
pub use single_project::SingleProject;
pub use timelines::Timelines;
pub use tutorial::Tutorial;
