//! View Helpers
//!
//! Browser-backed randomness for palette seeds and logo picks, and the
//! identity key that decides when a results view is torn down.

use crate::models::Project;

/// Identity key for a mounted results view.
///
/// Keying on the id keeps the view (and its edit buffers) alive when a cache
/// refresh swaps the record for an updated copy of the same project; only a
/// different project, or no project, replaces the view.
pub fn result_key(project: Option<&Project>) -> Option<String> {
    project.map(|p| p.id.clone())
}

/// Six-digit hex seed for the palette API, e.g. `"a3f01c"`
pub fn random_hex_seed() -> String {
    hex_seed_from(js_sys::Math::random())
}

/// Uniform random index into a slice of `len` elements
pub fn random_index(len: usize) -> usize {
    index_from(js_sys::Math::random(), len)
}

fn hex_seed_from(unit: f64) -> String {
    let value = (unit * 0xFFFFFF as f64).floor() as u32;
    format!("{value:06x}")
}

fn index_from(unit: f64, len: usize) -> usize {
    ((unit * len as f64).floor() as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectAttributes;

    fn sample_project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            attributes: ProjectAttributes {
                name: "Recipe Box".into(),
                description: "Stores recipes".into(),
                technologies: "React, Express".into(),
                collaborators: 2,
                time: "3 weeks".into(),
                saved: false,
                steps: vec!["Plan".into()],
                features: vec!["Search".into()],
                interactions: vec!["Click".into()],
                colors: vec!["#aabbcc".into()],
                logo_url: String::new(),
                logo_font: String::new(),
                user_id: 1,
            },
        }
    }

    #[test]
    fn result_key_ignores_content_changes() {
        let before = sample_project("11");
        let mut after = before.clone();
        after.attributes.saved = true;
        after.attributes.name = "Renamed".into();
        // A refreshed copy of the same project keeps the same key
        assert_eq!(
            result_key(Some(&before)),
            result_key(Some(&after)),
        );
    }

    #[test]
    fn result_key_changes_with_the_project() {
        let first = sample_project("11");
        let second = sample_project("12");
        assert_ne!(result_key(Some(&first)), result_key(Some(&second)));
        assert_eq!(result_key(None), None);
    }

    #[test]
    fn hex_seed_is_six_lowercase_digits() {
        assert_eq!(hex_seed_from(0.0), "000000");
        assert_eq!(hex_seed_from(0.5), "7fffff");
        let top = hex_seed_from(0.999_999_9);
        assert_eq!(top.len(), 6);
        assert!(top.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn index_stays_in_bounds() {
        assert_eq!(index_from(0.0, 4), 0);
        assert_eq!(index_from(0.99, 4), 3);
        // unit == 1.0 never happens from Math::random, but clamp anyway
        assert_eq!(index_from(1.0, 4), 3);
        assert_eq!(index_from(0.5, 0), 0);
    }
}
