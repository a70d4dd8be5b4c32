//! # Layout Configuration
//!
//! Page geometry, theme and labels for one export. Everything has a default
//! so a configuration file only needs to name what it changes:
//!
//! ```json
//! { "pageSize": "Letter", "labels": { "experience": "EXPÉRIENCE PROFESSIONNELLE" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::layout::cursor::PageGeometry;
use crate::style::Theme;

/// Standard page sizes in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Edge values (top, right, bottom, left) used for page margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// User-visible fixed strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub certifications: String,
    pub projects: String,
    /// Closes an experience range that has a start but no end.
    pub present: String,
    /// Prefix for a project's technologies line.
    pub technologies: String,
    /// Drawn in the header when the record has no name.
    pub placeholder_name: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            summary: "PROFESSIONAL SUMMARY".to_string(),
            experience: "PROFESSIONAL EXPERIENCE".to_string(),
            education: "EDUCATION".to_string(),
            skills: "SKILLS".to_string(),
            certifications: "CERTIFICATIONS".to_string(),
            projects: "PROJECTS".to_string(),
            present: "Present".to_string(),
            technologies: "Technologies:".to_string(),
            placeholder_name: "Your Name".to_string(),
        }
    }
}

/// Configuration for one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_size: PageSize,
    /// Page margins. `top` applies to continuation pages; page 1 starts
    /// below the header band instead.
    pub margin: Edges,
    /// Height of the coloured band on page 1.
    pub header_height: f64,
    /// Space between the header band and the first section.
    pub header_gap: f64,
    pub theme: Theme,
    pub labels: Labels,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: Edges {
                top: 48.0,
                right: 48.0,
                bottom: 40.0,
                left: 48.0,
            },
            header_height: 130.0,
            header_gap: 20.0,
            theme: Theme::default(),
            labels: Labels::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn geometry(&self) -> PageGeometry {
        let (width, height) = self.page_size.dimensions();
        PageGeometry {
            width,
            height,
            margin: self.margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = LayoutConfig::default().geometry();
        assert_eq!(g.width, 595.28);
        assert!((g.content_width() - 499.28).abs() < 1e-9);
        assert!((g.printable_bottom() - 801.89).abs() < 1e-9);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = LayoutConfig::from_json(
            r#"{ "pageSize": "Letter", "labels": { "skills": "COMPÉTENCES" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.page_size, PageSize::Letter);
        assert_eq!(cfg.labels.skills, "COMPÉTENCES");
        assert_eq!(cfg.labels.present, "Present");
        assert_eq!(cfg.header_height, 130.0);
        assert_eq!(cfg.margin.left, 48.0);
    }

    #[test]
    fn test_custom_page_size() {
        let cfg = LayoutConfig::from_json(
            r#"{ "pageSize": { "Custom": { "width": 400, "height": 600 } } }"#,
        )
        .unwrap();
        assert_eq!(cfg.page_size.dimensions(), (400.0, 600.0));
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(PageSize::A4.dimensions(), (595.28, 841.89));
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
    }
}
