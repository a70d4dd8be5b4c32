//! # CV Record
//!
//! The input representation for the layout engine: one flat résumé record,
//! as populated by a data-entry form. Every field is optional and defaults
//! to empty, so `{}` is a valid (if unimpressive) record.
//!
//! Blankness is decided here, once. A section whose entries are all blank is
//! treated exactly like an absent section: it never reaches the page.

use serde::{Deserialize, Serialize};

/// A complete résumé ready for layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvRecord {
    // ── Identity and contact ───────────────────────────────────
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Professional-network handle or URL.
    #[serde(alias = "linkedIn")]
    pub linkedin: String,
    pub website: String,
    pub summary: String,

    // ── Sections ───────────────────────────────────────────────
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free-text label, never parsed as a date.
    #[serde(alias = "startDate")]
    pub start: String,
    #[serde(alias = "endDate")]
    pub end: String,
    /// One bullet per non-empty line.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(alias = "startYear")]
    pub start: String,
    #[serde(alias = "endYear")]
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub technologies: String,
    pub description: String,
}

/// True for empty or whitespace-only strings.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Experience {
    pub fn is_blank(&self) -> bool {
        [&self.company, &self.role, &self.start, &self.end, &self.description]
            .iter()
            .all(|s| is_blank(s))
    }
}

impl Education {
    pub fn is_blank(&self) -> bool {
        [&self.institution, &self.degree, &self.field, &self.start, &self.end]
            .iter()
            .all(|s| is_blank(s))
    }
}

impl Certification {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.issuer, &self.year].iter().all(|s| is_blank(s))
    }
}

impl Project {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.technologies, &self.description]
            .iter()
            .all(|s| is_blank(s))
    }
}

impl CvRecord {
    /// Parse a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, crate::error::FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Contact fields in header order, skipping blanks.
    pub fn contacts(&self) -> Vec<&str> {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.website,
        ]
        .into_iter()
        .filter(|s| !is_blank(s))
        .map(|s| s.trim())
        .collect()
    }

    pub fn has_summary(&self) -> bool {
        !is_blank(&self.summary)
    }

    pub fn experiences(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter().filter(|e| !e.is_blank())
    }

    pub fn educations(&self) -> impl Iterator<Item = &Education> {
        self.educations.iter().filter(|e| !e.is_blank())
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
    }

    pub fn certifications(&self) -> impl Iterator<Item = &Certification> {
        self.certifications.iter().filter(|c| !c.is_blank())
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid_record() {
        let record = CvRecord::from_json("{}").unwrap();
        assert_eq!(record, CvRecord::default());
    }

    #[test]
    fn test_camel_case_and_aliases() {
        let json = r#"{
            "fullName": "Amina Saïdi",
            "linkedIn": "in/amina",
            "experiences": [{ "company": "Acme", "startDate": "2020", "endDate": "2023" }],
            "educations": [{ "institution": "INSAT", "startYear": "2015" }]
        }"#;
        let record = CvRecord::from_json(json).unwrap();
        assert_eq!(record.full_name, "Amina Saïdi");
        assert_eq!(record.linkedin, "in/amina");
        assert_eq!(record.experiences[0].start, "2020");
        assert_eq!(record.experiences[0].end, "2023");
        assert_eq!(record.educations[0].start, "2015");
    }

    #[test]
    fn test_blank_entries_are_filtered() {
        let record = CvRecord {
            experiences: vec![Experience::default(), Experience {
                company: "Acme".into(),
                ..Default::default()
            }],
            skills: vec!["  ".into(), " Rust ".into(), "".into()],
            certifications: vec![Certification {
                name: " ".into(),
                issuer: "\t".into(),
                year: String::new(),
            }],
            ..Default::default()
        };
        assert_eq!(record.experiences().count(), 1);
        assert_eq!(record.skills().collect::<Vec<_>>(), vec!["Rust"]);
        assert_eq!(record.certifications().count(), 0);
    }

    #[test]
    fn test_contacts_order_and_trim() {
        let record = CvRecord {
            email: " a@b.c ".into(),
            phone: "".into(),
            location: "Tunis".into(),
            website: "amina.dev".into(),
            ..Default::default()
        };
        assert_eq!(record.contacts(), vec!["a@b.c", "Tunis", "amina.dev"]);
    }

    #[test]
    fn test_type_mismatch_is_parse_error() {
        let err = CvRecord::from_json(r#"{"skills": "Rust"}"#).unwrap_err();
        assert!(matches!(err, crate::error::FolioError::Parse { .. }));
    }
}
