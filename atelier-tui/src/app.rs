use std::path::PathBuf;
use std::time::{Duration, Instant};

use image::{DynamicImage, GrayImage};

use atelier_entities::{Draft, PortfolioData, Project, ALL_CATEGORY};
use atelier_imageops::CropState;
use atelier_vault::{backup, Store};

use crate::components::InputField;

/// How long copied/status acknowledgments stay on screen.
pub const ACK_TTL: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Portfolio,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Profile,
    Projects,
    Categories,
    Publish,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Profile,
        AdminTab::Projects,
        AdminTab::Categories,
        AdminTab::Publish,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AdminTab::Profile => "Profile",
            AdminTab::Projects => "Projects",
            AdminTab::Categories => "Categories",
            AdminTab::Publish => "Publish",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Transient status line shown in the admin footer.
pub struct Status {
    pub text: String,
    pub error: bool,
    pub shown_at: Instant,
}

/// Project editor modal state; holds its own copy of the project until
/// the owner applies it into the draft.
pub struct EditorState {
    pub project: Project,
    pub focus: usize,
    pub image_path: InputField,
}

pub const EDITOR_TITLE: usize = 0;
pub const EDITOR_CATEGORY: usize = 1;
pub const EDITOR_DESCRIPTION: usize = 2;
pub const EDITOR_LINK: usize = 3;
pub const EDITOR_IMAGE: usize = 4;
pub const EDITOR_FEATURED: usize = 5;
pub const EDITOR_APPLY: usize = 6;
pub const EDITOR_ROWS: usize = 7;

impl EditorState {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            focus: EDITOR_TITLE,
            image_path: InputField::new("Replace image (path)")
                .with_placeholder("/path/to/image.jpg"),
        }
    }
}

/// Avatar cropper modal state: source pixels plus the pan/zoom window.
pub struct CropperState {
    pub source: DynamicImage,
    pub luma: GrayImage,
    pub crop: CropState,
}

impl CropperState {
    pub fn new(source: DynamicImage) -> Self {
        let luma = source.to_luma8();
        Self {
            source,
            luma,
            crop: CropState::default(),
        }
    }
}

/// Draft editor state: one draft, four tabs, per-tab cursors and the
/// modal sub-states. Dropped wholesale when the admin view is left.
pub struct AdminState {
    pub tab: AdminTab,
    pub draft: Draft,
    pub status: Option<Status>,

    pub profile_focus: usize,
    pub avatar_path: InputField,

    pub project_cursor: usize,
    pub grabbed: bool,
    pub editor: Option<EditorState>,
    pub cropper: Option<CropperState>,

    pub category_cursor: usize,

    pub import_path: Option<InputField>,
}

pub const PROFILE_NAME: usize = 0;
pub const PROFILE_EMAIL: usize = 1;
pub const PROFILE_BIO: usize = 2;
pub const PROFILE_AVATAR: usize = 3;
pub const PROFILE_ROWS: usize = 4;

impl AdminState {
    pub fn new(committed: &PortfolioData) -> Self {
        Self {
            tab: AdminTab::Profile,
            draft: Draft::from_committed(committed),
            status: None,
            profile_focus: PROFILE_NAME,
            avatar_path: InputField::new("Portrait (path)")
                .with_placeholder("/path/to/portrait.jpg"),
            project_cursor: 0,
            grabbed: false,
            editor: None,
            cropper: None,
            category_cursor: 0,
            import_path: None,
        }
    }

    /// Mutable access to the profile text field under the cursor, if the
    /// cursor is on a draft-backed field.
    pub fn focused_profile_field(&mut self) -> Option<&mut String> {
        let profile = &mut self.draft.data.profile;
        match self.profile_focus {
            PROFILE_NAME => Some(&mut profile.name),
            PROFILE_EMAIL => Some(&mut profile.email),
            PROFILE_BIO => Some(&mut profile.bio),
            _ => None,
        }
    }
}

pub struct App {
    pub store: Store,
    pub backup_dir: PathBuf,
    pub view: View,

    // Public view state.
    pub filter: usize,
    pub section_cursor: usize,
    pub contact_open: bool,
    pub email_copied_at: Option<Instant>,

    pub admin: AdminState,
}

impl App {
    pub fn new(store: Store, backup_dir: PathBuf, start_admin: bool) -> Self {
        let admin = AdminState::new(store.committed());
        Self {
            store,
            backup_dir,
            view: if start_admin {
                View::Admin
            } else {
                View::Portfolio
            },
            filter: 0,
            section_cursor: 0,
            contact_open: false,
            email_copied_at: None,
            admin,
        }
    }

    /// Name of the active category filter, falling back to the reserved
    /// entry when the committed list shrank under the cursor.
    pub fn active_filter(&self) -> &str {
        self.store
            .committed()
            .categories
            .get(self.filter)
            .map(String::as_str)
            .unwrap_or(ALL_CATEGORY)
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        let len = self.store.committed().categories.len();
        if len == 0 {
            return;
        }
        self.filter = if forward {
            (self.filter + 1) % len
        } else {
            (self.filter + len - 1) % len
        };
        self.section_cursor = 0;
    }

    /// Point the filter at a concrete category (the expand affordance).
    pub fn expand_category(&mut self, category: &str) {
        if let Some(idx) = self
            .store
            .committed()
            .categories
            .iter()
            .position(|c| c == category)
        {
            self.filter = idx;
            self.section_cursor = 0;
        }
    }

    /// Enter the editor with a fresh working copy of the committed model.
    pub fn enter_admin(&mut self) {
        self.admin = AdminState::new(self.store.committed());
        self.view = View::Admin;
    }

    /// Leave the editor, silently discarding the draft.
    pub fn leave_admin(&mut self) {
        self.view = View::Portfolio;
        self.filter = 0;
        self.section_cursor = 0;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.admin.status = Some(Status {
            text: text.into(),
            error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.admin.status = Some(Status {
            text: text.into(),
            error: true,
            shown_at: Instant::now(),
        });
    }

    /// Commit the draft into the store (write-through). The draft stays
    /// live so editing can continue from what was just committed.
    pub fn commit_draft(&mut self) {
        self.store.commit(self.admin.draft.data.clone());
        if self.store.dirty() {
            self.set_error(
                "Synced in memory only — snapshot write failed, edits are not durable",
            );
        } else {
            self.set_status("Changes synced to the snapshot");
        }
    }

    pub fn export_backup(&mut self) {
        match backup::export(&self.admin.draft.data, &self.backup_dir) {
            Ok(path) => self.set_status(format!("Backup written to {:?}", path)),
            Err(err) => self.set_error(format!("Export failed: {}", err)),
        }
    }

    /// Replace the draft from a backup file; the committed model is never
    /// touched here, syncing stays a separate explicit step.
    pub fn import_backup(&mut self, path: PathBuf) {
        match backup::import(&path) {
            Ok(data) => {
                self.admin.draft = Draft::from(data);
                self.admin.project_cursor = 0;
                self.admin.category_cursor = 0;
                self.set_status(
                    "Backup loaded into the draft — press Ctrl-S to sync",
                );
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Expire transient acknowledgments. Called once per loop tick.
    pub fn update(&mut self) {
        if let Some(at) = self.email_copied_at {
            if at.elapsed() >= ACK_TTL {
                self.email_copied_at = None;
            }
        }
        if let Some(status) = &self.admin.status {
            if status.shown_at.elapsed() >= ACK_TTL {
                self.admin.status = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use atelier_vault::Vault;

    fn app(dir: &TempDir) -> App {
        let vault = Vault::new("test", &dir.path().join("portfolio.json"));
        App::new(Store::open(vault), dir.path().to_path_buf(), false)
    }

    #[test]
    fn filter_cycles_through_committed_categories() {
        let dir = TempDir::new("app").unwrap();
        let mut app = app(&dir);
        let len = app.store.committed().categories.len();

        assert_eq!(app.active_filter(), ALL_CATEGORY);
        app.cycle_filter(true);
        assert_eq!(app.filter, 1);
        app.cycle_filter(false);
        app.cycle_filter(false);
        assert_eq!(app.filter, len - 1);
    }

    #[test]
    fn entering_admin_clones_committed_and_leaving_discards() {
        let dir = TempDir::new("app").unwrap();
        let mut app = app(&dir);

        app.enter_admin();
        app.admin.draft.data.profile.name = "Discarded".to_string();
        app.leave_admin();
        assert_ne!(app.store.committed().profile.name, "Discarded");

        // A new admin session starts from the committed model again.
        app.enter_admin();
        assert_eq!(
            app.admin.draft.data.profile.name,
            app.store.committed().profile.name
        );
    }

    #[test]
    fn commit_pushes_the_draft_into_the_store() {
        let dir = TempDir::new("app").unwrap();
        let mut app = app(&dir);

        app.enter_admin();
        app.admin.draft.data.profile.name = "Committed".to_string();
        app.commit_draft();
        assert_eq!(app.store.committed().profile.name, "Committed");
        assert!(!app.store.dirty());
    }

    #[test]
    fn failed_import_leaves_the_draft_untouched() {
        let dir = TempDir::new("app").unwrap();
        let mut app = app(&dir);
        app.enter_admin();

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, r#"{"projects": []}"#).unwrap();

        let before = app.admin.draft.data.clone();
        app.import_backup(broken);
        assert_eq!(app.admin.draft.data, before);
        assert!(app.admin.status.as_ref().unwrap().error);
    }

    #[test]
    fn successful_import_replaces_only_the_draft() {
        let dir = TempDir::new("app").unwrap();
        let mut app = app(&dir);
        app.enter_admin();

        let mut exported = app.store.committed().clone();
        exported.profile.name = "From Backup".to_string();
        let path = backup::export(&exported, dir.path()).unwrap();

        app.import_backup(path);
        assert_eq!(app.admin.draft.data.profile.name, "From Backup");
        assert_ne!(app.store.committed().profile.name, "From Backup");
    }

    #[test]
    fn admin_tab_cycle_wraps_both_ways() {
        assert_eq!(AdminTab::Publish.next(), AdminTab::Profile);
        assert_eq!(AdminTab::Profile.prev(), AdminTab::Publish);
        assert_eq!(AdminTab::Profile.next(), AdminTab::Projects);
    }
}
