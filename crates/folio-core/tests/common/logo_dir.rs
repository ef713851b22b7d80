//! Temporary logo directories populated with empty image files.

use std::fs::File;
use tempfile::TempDir;

/// Logo files as they ship with the site.
pub const SITE_LOGOS: &[&str] = &[
    "Astro-logo.svg",
    "Git-logo.svg",
    "Java-logo.svg",
    "Matplotlib-logo.svg",
    "Numpy_logo.svg",
    "Pandas-logo.svg",
    "Postgres-logo.svg",
    "posthog-logo.svg",
    "Python-logo.svg",
    "SQL.svg",
    "Scipy-logo.svg",
    "Seaborn-logo.svg",
    "scikit-learn-logo.svg",
    "spring-logo.svg",
    "README.md",
];

/// Creates a temp dir containing one empty file per name.
pub fn with_files(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}
