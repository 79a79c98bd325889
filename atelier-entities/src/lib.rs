//! Data model for a curated portfolio document.
//!
//! This crate provides:
//! - `Profile`: the site owner's identity block (avatar, name, bio, email).
//! - `Project`: a single gallery entry with ordering-significant placement.
//! - `PortfolioData`: the whole document held as the single source of truth,
//!   together with the queries the public view renders from.
//! - `Draft`: a working copy of the document with the editing operations of
//!   the admin surface; nothing here touches persistence.
//!
//! The wire shape (camelCase keys, optional feature fields skipped when
//! absent) is stable: snapshots and backups interchange with documents
//! produced by earlier versions of the tool.

mod draft;
mod portfolio;
mod profile;
mod project;

pub use draft::Draft;
pub use portfolio::{
    array_move, PortfolioData, Section, ALL_CATEGORY, FEATURED_CAP,
    SECTION_PREVIEW,
};
pub use profile::Profile;
pub use project::Project;
