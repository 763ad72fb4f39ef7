//! Static Data
//!
//! Compile-time tables backing the form wizard, the logo generator and the
//! demo-video carousel.

/// Font families the logo generator picks from
pub const FONTS: &[&str] = &[
    "Lobster",
    "Pacifico",
    "Monoton",
    "Bungee Shade",
    "Press Start 2P",
    "Abril Fatface",
    "Righteous",
    "Shrikhand",
];

/// Pre-generated logo assets the logo generator picks from
pub const LOGO_URLS: &[&str] = &[
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-01.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-02.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-03.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-04.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-05.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-06.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-07.png",
    "https://project-planner-assets.s3.amazonaws.com/logos/logo-08.png",
];

/// Technology name -> embedded demo clip
pub const TECH_VIDEOS: &[(&str, &str)] = &[
    ("React", "https://www.youtube.com/embed/Tn6-PIqc4UM"),
    ("Vue", "https://www.youtube.com/embed/nhBVL41-_Cw"),
    ("Angular", "https://www.youtube.com/embed/Ata9cSC2WpM"),
    ("Svelte", "https://www.youtube.com/embed/rv3Yq-B8qp4"),
    ("JavaScript", "https://www.youtube.com/embed/DHjqpvDnNGE"),
    ("TypeScript", "https://www.youtube.com/embed/zQnBQ4tB3ZA"),
    ("Node.js", "https://www.youtube.com/embed/ENrzD9HAZK4"),
    ("Express", "https://www.youtube.com/embed/SccSCuHhOw0"),
    ("Ruby on Rails", "https://www.youtube.com/embed/mpWFrUwAN88"),
    ("PostgreSQL", "https://www.youtube.com/embed/n2Fluyr3lbc"),
    ("MongoDB", "https://www.youtube.com/embed/-bt_y4Loofg"),
    ("GraphQL", "https://www.youtube.com/embed/eIQh02xuVw4"),
];

/// Shown when a technology has no clip of its own, so the carousel never
/// renders a hole
const FALLBACK_VIDEO: &str = "https://www.youtube.com/embed/zOjov-2OZ0E";

/// Embedded walkthrough on the tutorial page
pub const TUTORIAL_VIDEO: &str = "https://www.youtube.com/embed/G8oez6NK7zY";

pub fn video_for(tech: &str) -> &'static str {
    TECH_VIDEOS
        .iter()
        .find(|(name, _)| *name == tech)
        .map(|(_, url)| *url)
        .unwrap_or(FALLBACK_VIDEO)
}

/// Technology options per project type, backing step 2 of the form wizard
pub const TECH_STACKS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &["React", "Vue", "Angular", "Svelte", "JavaScript", "TypeScript"],
    ),
    (
        "backend",
        &["Node.js", "Express", "Ruby on Rails", "PostgreSQL", "MongoDB", "GraphQL"],
    ),
    (
        "fullstack",
        &["React", "Node.js", "Express", "TypeScript", "PostgreSQL", "GraphQL"],
    ),
];

pub fn stacks_for(project_type: &str) -> &'static [&'static str] {
    TECH_STACKS
        .iter()
        .find(|(name, _)| *name == project_type)
        .map(|(_, options)| *options)
        .unwrap_or(&[])
}

/// Time-frame units offered by step 3 of the form wizard
pub const TIME_UNITS: &[&str] = &["days", "weeks", "months"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_technology_maps_to_its_clip() {
        assert_eq!(video_for("React"), "https://www.youtube.com/embed/Tn6-PIqc4UM");
    }

    #[test]
    fn unknown_technology_falls_back_to_generic_clip() {
        assert_eq!(video_for("COBOL"), FALLBACK_VIDEO);
    }

    #[test]
    fn every_project_type_has_options() {
        for kind in ["frontend", "backend", "fullstack"] {
            assert!(!stacks_for(kind).is_empty());
        }
        assert!(stacks_for("embedded").is_empty());
    }
}
