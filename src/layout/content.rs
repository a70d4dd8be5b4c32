//! # Content Renderers
//!
//! Thin adapters from record entries to [`Block`]s. All record text is
//! sanitized here, before anything is measured. Glyphs the layout inserts
//! itself (the bullet, the skills separator) are added afterwards and reach
//! the page as-is.

use super::blocks::{Block, BulletList, HeaderBand, KeyValueRow, Paragraph, TagFlow};
use crate::config::LayoutConfig;
use crate::font::StandardFont;
use crate::model::{is_blank, Certification, CvRecord, Education, Experience, Project};
use crate::style::TextStyle;
use crate::text::sanitize;

/// Headroom requested before each entry of a list section.
pub const EXPERIENCE_HEADROOM: f64 = 55.0;
pub const EDUCATION_HEADROOM: f64 = 40.0;
pub const PROJECT_HEADROOM: f64 = 50.0;

/// Gap below an entry's key-value row.
pub const ROW_GAP: f64 = 2.0;
pub const EXPERIENCE_TRAILING_GAP: f64 = 6.0;
pub const EDUCATION_TRAILING_GAP: f64 = 4.0;
pub const PROJECT_TRAILING_GAP: f64 = 6.0;

pub const SKILL_SEPARATOR: &str = "   \u{2022}   ";
pub const SKILL_ROW_PITCH: f64 = 15.0;

const RANGE_SEPARATOR: &str = " \u{2013} ";
const ISSUER_SEPARATOR: &str = " \u{2013} ";
const DEGREE_SEPARATOR: &str = " \u{2014} ";

/// A titled run of blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: Vec<Block>,
}

/// The page-1 header band.
pub fn header(record: &CvRecord, config: &LayoutConfig) -> Block {
    let theme = &config.theme;
    let name = if is_blank(&record.full_name) {
        config.labels.placeholder_name.as_str()
    } else {
        record.full_name.trim()
    };

    Block::HeaderBand(HeaderBand {
        height: config.header_height,
        background: theme.header_background,
        name: sanitize(name),
        name_style: TextStyle::new(StandardFont::HelveticaBold, 26.0, theme.header_name),
        title: sanitize(record.job_title.trim()),
        title_style: TextStyle::new(StandardFont::Helvetica, 13.0, theme.header_title),
        contacts: record.contacts().into_iter().map(sanitize).collect(),
        contact_style: TextStyle::new(StandardFont::Helvetica, 10.0, theme.header_contact),
    })
}

/// Every populated section, in document order.
pub fn sections(record: &CvRecord, config: &LayoutConfig) -> Vec<Section> {
    let labels = &config.labels;
    let theme = &config.theme;
    let mut sections = Vec::new();

    if record.has_summary() {
        sections.push(Section {
            title: labels.summary.clone(),
            body: vec![Block::Paragraph(Paragraph {
                text: sanitize(&record.summary),
                style: theme.body_italic(),
            })],
        });
    }

    let body: Vec<Block> = record
        .experiences()
        .flat_map(|e| experience(e, config))
        .collect();
    if !body.is_empty() {
        sections.push(Section {
            title: labels.experience.clone(),
            body,
        });
    }

    let body: Vec<Block> = record
        .educations()
        .flat_map(|e| education(e, config))
        .collect();
    if !body.is_empty() {
        sections.push(Section {
            title: labels.education.clone(),
            body,
        });
    }

    let tags: Vec<String> = record.skills().map(sanitize).collect();
    if !tags.is_empty() {
        sections.push(Section {
            title: labels.skills.clone(),
            body: vec![Block::TagFlow(TagFlow {
                tags,
                separator: SKILL_SEPARATOR.to_string(),
                style: theme.body(),
                line_height: SKILL_ROW_PITCH,
            })],
        });
    }

    let items: Vec<String> = record.certifications().map(certification_line).collect();
    if !items.is_empty() {
        sections.push(Section {
            title: labels.certifications.clone(),
            body: vec![Block::BulletList(BulletList {
                items,
                style: theme.body(),
                glyph_style: theme.bullet_glyph(),
            })],
        });
    }

    let body: Vec<Block> = record
        .projects()
        .flat_map(|p| project(p, config))
        .collect();
    if !body.is_empty() {
        sections.push(Section {
            title: labels.projects.clone(),
            body,
        });
    }

    sections
}

fn experience(entry: &Experience, config: &LayoutConfig) -> Vec<Block> {
    let theme = &config.theme;
    let range = format_range(&entry.start, &entry.end, Some(config.labels.present.as_str()));
    let mut blocks = vec![
        Block::Reserve(EXPERIENCE_HEADROOM),
        Block::KeyValueRow(KeyValueRow {
            left: sanitize(entry.company.trim()),
            left_style: theme.label(),
            right: sanitize(&range),
            right_style: theme.secondary(),
        }),
        Block::Gap(ROW_GAP),
    ];
    if !is_blank(&entry.role) {
        blocks.push(Block::Paragraph(Paragraph {
            text: sanitize(entry.role.trim()),
            style: theme.secondary_italic(),
        }));
    }
    if !is_blank(&entry.description) {
        blocks.push(bullets(&entry.description, config));
    }
    blocks.push(Block::Gap(EXPERIENCE_TRAILING_GAP));
    blocks
}

fn education(entry: &Education, config: &LayoutConfig) -> Vec<Block> {
    let theme = &config.theme;
    let range = format_range(&entry.start, &entry.end, None);
    let mut blocks = vec![
        Block::Reserve(EDUCATION_HEADROOM),
        Block::KeyValueRow(KeyValueRow {
            left: sanitize(entry.institution.trim()),
            left_style: theme.label(),
            right: sanitize(&range),
            right_style: theme.secondary(),
        }),
        Block::Gap(ROW_GAP),
    ];
    let degree_field = join_non_blank(DEGREE_SEPARATOR, &[entry.degree.as_str(), entry.field.as_str()]);
    if !degree_field.is_empty() {
        blocks.push(Block::Paragraph(Paragraph {
            text: sanitize(&degree_field),
            style: theme.secondary(),
        }));
    }
    blocks.push(Block::Gap(EDUCATION_TRAILING_GAP));
    blocks
}

fn project(entry: &Project, config: &LayoutConfig) -> Vec<Block> {
    let theme = &config.theme;
    let mut blocks = vec![
        Block::Reserve(PROJECT_HEADROOM),
        Block::KeyValueRow(KeyValueRow {
            left: sanitize(entry.name.trim()),
            left_style: theme.label(),
            right: String::new(),
            right_style: theme.secondary(),
        }),
        Block::Gap(ROW_GAP),
    ];
    if !is_blank(&entry.technologies) {
        let line = format!("{} {}", config.labels.technologies, entry.technologies.trim());
        blocks.push(Block::Paragraph(Paragraph {
            text: sanitize(&line),
            style: theme.secondary_italic(),
        }));
    }
    if !is_blank(&entry.description) {
        blocks.push(bullets(&entry.description, config));
    }
    blocks.push(Block::Gap(PROJECT_TRAILING_GAP));
    blocks
}

fn bullets(description: &str, config: &LayoutConfig) -> Block {
    Block::BulletList(BulletList {
        items: split_bullets(description).into_iter().map(|b| sanitize(&b)).collect(),
        style: config.theme.body(),
        glyph_style: config.theme.bullet_glyph(),
    })
}

/// One bullet per non-empty line, with a leading `•`, `-` or `*` marker
/// stripped. Text with no usable line becomes a single bullet.
pub fn split_bullets(text: &str) -> Vec<String> {
    let bullets: Vec<String> = text
        .lines()
        .map(|line| {
            line.trim_start()
                .strip_prefix(['\u{2022}', '-', '*'])
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect();

    if bullets.is_empty() && !is_blank(text) {
        return vec![text.trim().to_string()];
    }
    bullets
}

/// Render a start/end label pair. `open_end` closes a range that has only a
/// start; without it the start stands alone.
pub fn format_range(start: &str, end: &str, open_end: Option<&str>) -> String {
    let (start, end) = (start.trim(), end.trim());
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end.to_string(),
        (false, false) => format!("{start}{RANGE_SEPARATOR}{end}"),
        (false, true) => match open_end {
            Some(label) if !is_blank(label) => format!("{start}{RANGE_SEPARATOR}{}", label.trim()),
            _ => start.to_string(),
        },
    }
}

/// Join the non-blank parts, trimmed, with `separator`.
pub fn join_non_blank(separator: &str, parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `name [– issuer] [(year)]`, sanitized.
pub fn certification_line(cert: &Certification) -> String {
    let mut line = cert.name.trim().to_string();
    if !is_blank(&cert.issuer) {
        if !line.is_empty() {
            line.push_str(ISSUER_SEPARATOR);
        }
        line.push_str(cert.issuer.trim());
    }
    if !is_blank(&cert.year) {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("({})", cert.year.trim()));
    }
    sanitize(&line)
}
