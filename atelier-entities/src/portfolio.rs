use serde::{Deserialize, Serialize};

use crate::{Profile, Project};

/// The reserved "show all" pseudo-category. Always present, never
/// deletable or renamable, and never assigned to a project. Kept as the
/// literal string of the original documents so snapshots interchange.
pub const ALL_CATEGORY: &str = "全部";

/// How many projects a section shows under the "show all" filter before
/// it is truncated behind the expand affordance.
pub const SECTION_PREVIEW: usize = 3;

/// Maximum number of projects in the hero strip.
pub const FEATURED_CAP: usize = 3;

/// The whole portfolio document: one profile, ordered projects, ordered
/// category names. Read once at startup, replaced wholesale on commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
}

/// One rendered block of the gallery: a category and the projects shown
/// under it. `truncated` marks that more entries exist than are listed.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub category: &'a str,
    pub projects: Vec<&'a Project>,
    pub truncated: bool,
}

impl PortfolioData {
    /// Built-in starter dataset, used whenever no valid snapshot exists.
    pub fn seed() -> Self {
        let categories = vec![
            ALL_CATEGORY.to_string(),
            "Editorial".to_string(),
            "Identity".to_string(),
            "Experiments".to_string(),
        ];

        let mut projects = Vec::new();
        let spec: &[(&str, &str, &str, i64, Option<i64>)] = &[
            (
                "Paper Monuments",
                "Editorial",
                "A serialized essay collection on vernacular architecture.",
                1_704_067_200_000,
                Some(1_706_745_600_000),
            ),
            (
                "Quiet Hours",
                "Editorial",
                "Photo essay shot between midnight and dawn.",
                1_706_745_600_000,
                None,
            ),
            (
                "Studio Marque",
                "Identity",
                "Brand system for a two-person letterpress studio.",
                1_709_251_200_000,
                Some(1_709_337_600_000),
            ),
            (
                "Celadon",
                "Identity",
                "Packaging exploration in a single glaze palette.",
                1_711_929_600_000,
                None,
            ),
            (
                "Grain Index",
                "Experiments",
                "Generative halftone studies, printed at A1.",
                1_714_521_600_000,
                None,
            ),
        ];

        for (idx, (title, category, description, created_at, featured_at)) in
            spec.iter().enumerate()
        {
            projects.push(Project {
                id: format!("seed-{:02}", idx + 1),
                title: (*title).to_string(),
                description: (*description).to_string(),
                category: (*category).to_string(),
                image_url: format!(
                    "https://picsum.photos/seed/atelier-{:02}/600/800",
                    idx + 1
                ),
                link: String::new(),
                created_at: *created_at,
                is_featured: Some(featured_at.is_some()),
                featured_at: *featured_at,
            });
        }

        Self {
            profile: Profile {
                avatar: String::new(),
                name: "Cecilia Lin".to_string(),
                bio: "Designing slow, printed things for fast screens."
                    .to_string(),
                email: "studio@cecilialin.example".to_string(),
            },
            projects,
            categories,
        }
    }

    /// Hero strip selection: featured projects ordered by ascending
    /// feature timestamp, capped at [`FEATURED_CAP`].
    pub fn featured_projects(&self) -> Vec<&Project> {
        let mut featured: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.featured())
            .collect();
        featured.sort_by_key(|p| p.featured_at.unwrap_or(0));
        featured.truncate(FEATURED_CAP);
        featured
    }

    /// Gallery blocks for the given filter.
    ///
    /// Under the reserved filter every non-reserved category appears in
    /// declared order, capped at [`SECTION_PREVIEW`] projects; a concrete
    /// filter yields that category alone, uncapped. Empty sections are
    /// omitted, which also hides projects whose category was deleted
    /// after assignment: the dangling reference is kept in the data and
    /// only filtered at render time.
    pub fn sections<'a>(&'a self, filter: &'a str) -> Vec<Section<'a>> {
        let show_all = filter == ALL_CATEGORY;
        let categories: Vec<&str> = if show_all {
            self.categories
                .iter()
                .filter(|c| c.as_str() != ALL_CATEGORY)
                .map(String::as_str)
                .collect()
        } else {
            vec![filter]
        };

        categories
            .into_iter()
            .filter_map(|category| {
                let all: Vec<&Project> = self
                    .projects
                    .iter()
                    .filter(|p| p.category == category)
                    .collect();
                if all.is_empty() {
                    return None;
                }
                let truncated = show_all && all.len() > SECTION_PREVIEW;
                let projects = if show_all {
                    all.into_iter().take(SECTION_PREVIEW).collect()
                } else {
                    all
                };
                Some(Section {
                    category,
                    projects,
                    truncated,
                })
            })
            .collect()
    }
}

/// Move the element at `from` to position `to`, preserving the relative
/// order of everything else. Out-of-range indices are ignored.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
