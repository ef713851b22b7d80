//! Trailing "logo" marker removal.

const MARKER: &str = "logo";

/// Removes a trailing `logo` or `-logo` (ASCII case-insensitive) from `stem`.
///
/// Only one marker is removed: `"logo-logo"` becomes `"logo"`.
pub fn strip_logo_marker(stem: &str) -> &str {
    let Some(split) = stem.len().checked_sub(MARKER.len()) else {
        return stem;
    };
    if !stem.is_char_boundary(split) || !stem[split..].eq_ignore_ascii_case(MARKER) {
        return stem;
    }
    let rest = &stem[..split];
    rest.strip_suffix('-').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hyphenated_marker() {
        assert_eq!(strip_logo_marker("Google-Ads-logo"), "Google-Ads");
        assert_eq!(strip_logo_marker("Python-LOGO"), "Python");
    }

    #[test]
    fn strips_bare_marker() {
        assert_eq!(strip_logo_marker("GoogleAdsLogo"), "GoogleAds");
        assert_eq!(strip_logo_marker("logo"), "");
    }

    #[test]
    fn underscore_is_left_for_separator_step() {
        assert_eq!(strip_logo_marker("numpy_logo"), "numpy_");
    }

    #[test]
    fn marker_must_be_trailing() {
        assert_eq!(strip_logo_marker("logos"), "logos");
        assert_eq!(strip_logo_marker("Logotype"), "Logotype");
        assert_eq!(strip_logo_marker("log"), "log");
    }

    #[test]
    fn only_one_marker_removed() {
        assert_eq!(strip_logo_marker("logo-logo"), "logo");
    }

    #[test]
    fn multibyte_prefix_is_safe() {
        assert_eq!(strip_logo_marker("ñlogo"), "ñ");
        assert_eq!(strip_logo_marker("añ"), "añ");
    }
}
