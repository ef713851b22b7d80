//! Display-name derivation for logo assets.
//!
//! Turns a raw asset path such as `../assets/logos/Google-Ads-logo.svg` into a
//! human-readable name (`Google Ads`). Each step is a separate pure function so
//! it can be tested on its own; [`normalize`] chains them in a fixed order.

mod marker;
mod path;
mod words;

pub use marker::strip_logo_marker;
pub use path::{file_name, strip_extension};
pub use words::{collapse_whitespace, normalize_separators, split_camel_case, title_case};

/// Derives the display name for the asset at `path`.
///
/// Steps, in order:
/// 1. take the file name (after the last `/` or `\`)
/// 2. drop the extension (from the last `.`)
/// 3. drop a trailing `logo` / `-logo` marker, case-insensitive
/// 4. turn runs of `-` / `_` into single spaces
/// 5. split lowercase→uppercase boundaries (`GoogleAds` → `Google Ads`)
/// 6. trim and collapse whitespace
/// 7. uppercase the first letter of every word
///
/// Total on any input; missing separators or extensions skip their step.
///
/// # Examples
///
/// - `normalize("a/b/Google-Ads-logo.svg")` → `"Google Ads"`
/// - `normalize("numpy_logo.svg")` → `"Numpy"`
pub fn normalize(path: &str) -> String {
    let stem = strip_extension(file_name(path));
    let stem = strip_logo_marker(stem);
    let spaced = normalize_separators(stem);
    let split = split_camel_case(&spaced);
    let collapsed = collapse_whitespace(&split);
    title_case(&collapsed)
}
