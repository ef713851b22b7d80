//! Static portfolio content: author, skills, studies and projects.
//!
//! Stored as given and exposed in declaration order; the site generator renders
//! these lists directly.

mod author;
mod projects;
mod skills;
mod studies;

pub use author::{Author, AUTHOR};
pub use projects::{icons, Project, PROJECTS, STACK_SEPARATOR};
pub use skills::{Skill, SKILLS};
pub use studies::{Study, STUDIES};

use crate::catalog::AllowList;

/// Public URL the site is deployed under.
pub const SITE_URL: &str = "https://achrafsalimi.me";

/// Logos shown on the site. "Scikit-learn" keeps its hyphen and therefore never
/// matches the normalized "Scikit Learn".
pub const DEFAULT_ALLOWED_LOGOS: &[&str] = &[
    "SQL",
    "Scikit-learn",
    "Git",
    "Python",
    "Pandas",
    "Numpy",
    "Scipy",
    "Spring",
    "Java",
    "Matplotlib",
    "Seaborn",
];

pub fn default_allow_list() -> AllowList {
    DEFAULT_ALLOWED_LOGOS.iter().copied().collect()
}
