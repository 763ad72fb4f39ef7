//! Data Models
//!
//! Project records as served by the projects API, the transient form payload,
//! and the palette API response shapes.

use serde::{Deserialize, Serialize};

/// One generated project plan. Owned by the remote API; the client only ever
/// holds ephemeral copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub attributes: ProjectAttributes,
}

/// Attribute block of a project record.
///
/// `steps`, `features`, `interactions` and `colors` travel over the wire as
/// newline-delimited strings; locally they are ordered lists, and only the
/// serde boundary joins/splits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    pub name: String,
    pub description: String,
    /// Comma-separated technology names, e.g. `"React, Express"`
    pub technologies: String,
    pub collaborators: u32,
    pub time: String,
    pub saved: bool,
    #[serde(with = "newline_list")]
    pub steps: Vec<String>,
    #[serde(with = "newline_list")]
    pub features: Vec<String>,
    #[serde(with = "newline_list")]
    pub interactions: Vec<String>,
    #[serde(with = "newline_list")]
    pub colors: Vec<String>,
    pub logo_url: String,
    pub logo_font: String,
    pub user_id: u32,
}

/// Answers collected by the form wizard. Lives only between submission and
/// plan creation, kept around so "Create Another" can re-post it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(rename = "type")]
    pub project_type: String,
    pub technologies: String,
    pub time: String,
    pub collaborators: u32,
}

/// Palette API response: a color scheme keyed by a hex seed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaletteResponse {
    pub colors: Vec<PaletteColor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaletteColor {
    pub hex: HexValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HexValue {
    pub value: String,
}

/// Bridges `Vec<String>` model fields to the API's newline-delimited strings.
///
/// `split('\n')` semantics are preserved exactly: an empty wire string decodes
/// to `vec![""]`, which is the "not yet a real color" placeholder the palette
/// repair flow keys off.
pub mod newline_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(list: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&list.join("\n"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(de)?;
        Ok(raw.split('\n').map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attributes() -> ProjectAttributes {
        ProjectAttributes {
            name: "RecipeBox".to_string(),
            description: "A recipe manager for busy cooks".to_string(),
            technologies: "React, Express".to_string(),
            collaborators: 3,
            time: "2 weeks".to_string(),
            saved: false,
            steps: vec!["Week 1: setup".to_string(), "Week 2: ship".to_string()],
            features: vec!["Search".to_string(), "Tagging".to_string()],
            interactions: vec!["Click a card".to_string()],
            colors: vec!["#111111".to_string(), "#222222".to_string()],
            logo_url: String::new(),
            logo_font: "Lobster".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn newline_fields_serialize_joined() {
        let json = serde_json::to_value(sample_attributes()).unwrap();
        assert_eq!(json["steps"], "Week 1: setup\nWeek 2: ship");
        assert_eq!(json["colors"], "#111111\n#222222");
    }

    #[test]
    fn newline_fields_round_trip() {
        let json = serde_json::to_string(&sample_attributes()).unwrap();
        let back: ProjectAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_attributes());
    }

    #[test]
    fn empty_newline_field_decodes_to_single_empty_entry() {
        let mut json = serde_json::to_value(sample_attributes()).unwrap();
        json["colors"] = serde_json::Value::String(String::new());
        let back: ProjectAttributes = serde_json::from_value(json).unwrap();
        assert_eq!(back.colors, vec![String::new()]);
    }

    #[test]
    fn form_data_uses_type_key_on_the_wire() {
        let form = FormData {
            project_type: "frontend".to_string(),
            technologies: "React, TypeScript".to_string(),
            time: "3 weeks".to_string(),
            collaborators: 2,
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["type"], "frontend");
        assert!(json.get("project_type").is_none());
    }

    #[test]
    fn palette_response_decodes() {
        let raw = r##"{"colors":[{"hex":{"value":"#A3F01C"}},{"hex":{"value":"#0C1D2E"}}]}"##;
        let palette: PaletteResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(palette.colors.len(), 2);
        assert_eq!(palette.colors[0].hex.value, "#A3F01C");
    }
}
