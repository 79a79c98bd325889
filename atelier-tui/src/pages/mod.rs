mod admin_categories;
mod admin_profile;
mod admin_projects;
mod admin_publish;
mod cropper;
mod editor;
mod portfolio;

pub use admin_categories::{handle_categories_input, render_categories_tab};
pub use admin_profile::{handle_profile_input, render_profile_tab};
pub use admin_projects::{handle_projects_input, render_projects_tab};
pub use admin_publish::{handle_publish_input, render_publish_tab};
pub use cropper::{handle_cropper_input, render_cropper};
pub use editor::{handle_editor_input, render_editor};
pub use portfolio::{
    handle_portfolio_input, render_contact_modal, render_portfolio,
};
