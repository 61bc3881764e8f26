//! PDF report rendering for mentor and mentee records
//!
//! Renders the read-side join types from the registry crate into A4 PDF
//! byte streams. Layout is a simple line cursor with page breaks; this is
//! deliberately not a document-layout engine.

use chrono::Utc;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use registry::{MenteeWithIssues, MentorOverview};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 7.0;

/// Line-cursor writer over an A4 document, breaking to a new page when the
/// bottom margin is reached.
struct LineWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> LineWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn line(&mut self, text: &str, size: f32, indent: f32, font: &IndirectFontRef) {
        if self.y < MARGIN {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                "content",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.layer
            .use_text(text, size, Mm(MARGIN + indent), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT / 2.0;
    }
}

fn write_mentee_section(
    writer: &mut LineWriter<'_>,
    mentee: &MenteeWithIssues,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    writer.line(
        &format!(
            "{} - {} ({}, Year {})",
            mentee.mentee.roll_number, mentee.mentee.name, mentee.mentee.department, mentee.mentee.year
        ),
        12.0,
        0.0,
        bold,
    );

    if mentee.issues.is_empty() {
        writer.line("No issues recorded", 10.0, 6.0, regular);
    } else {
        for issue in &mentee.issues {
            writer.line(
                &format!(
                    "[{}] {} (raised {})",
                    issue.status.as_str(),
                    issue.description,
                    issue.created_at.format("%Y-%m-%d")
                ),
                10.0,
                6.0,
                regular,
            );
        }
    }
    writer.gap();
}

/// Render a mentor's full overview (all mentees with their issues)
pub fn mentor_report(overview: &MentorOverview) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Mentor Report - {}", overview.mentor.name),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = LineWriter::new(&doc, doc.get_page(page).get_layer(layer));
    writer.line(
        &format!("Mentor Report - {}", overview.mentor.name),
        18.0,
        0.0,
        &bold,
    );
    writer.line(
        &format!(
            "{} | {} | generated {}",
            overview.mentor.email,
            overview.mentor.department,
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ),
        10.0,
        0.0,
        &regular,
    );
    writer.line(
        &format!("Mentees: {}", overview.mentees.len()),
        10.0,
        0.0,
        &regular,
    );
    writer.gap();

    for mentee in &overview.mentees {
        write_mentee_section(&mut writer, mentee, &regular, &bold);
    }

    Ok(doc.save_to_bytes()?)
}

/// Render a single mentee's record with its issues
pub fn mentee_report(mentee: &MenteeWithIssues) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Mentee Report - {}", mentee.mentee.name),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = LineWriter::new(&doc, doc.get_page(page).get_layer(layer));
    writer.line(
        &format!("Mentee Report - {}", mentee.mentee.name),
        18.0,
        0.0,
        &bold,
    );
    writer.line(
        &format!("Generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC")),
        10.0,
        0.0,
        &regular,
    );
    writer.gap();
    write_mentee_section(&mut writer, mentee, &regular, &bold);

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use db::entity::{issues, mentees, IssueStatus};
    use uuid::Uuid;

    fn sample_mentee() -> MenteeWithIssues {
        let now = Utc::now();
        let mentee_id = Uuid::new_v4();
        MenteeWithIssues {
            mentee: mentees::Model {
                id: mentee_id,
                mentor_id: Uuid::new_v4(),
                name: "Ravi".to_string(),
                roll_number: "21CS01".to_string(),
                department: "CSE".to_string(),
                year: "2".to_string(),
                created_at: now,
                updated_at: now,
            },
            issues: vec![issues::Model {
                id: Uuid::new_v4(),
                mentee_id,
                description: "missed midterm".to_string(),
                status: IssueStatus::Pending,
                created_at: now,
                updated_at: now,
            }],
        }
    }

    #[test]
    fn test_mentee_report_is_pdf() {
        let bytes = mentee_report(&sample_mentee()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_report_paginates_long_issue_lists() {
        let mut mentee = sample_mentee();
        let template = mentee.issues[0].clone();
        for i in 0..120 {
            let mut issue = template.clone();
            issue.id = Uuid::new_v4();
            issue.description = format!("follow-up item {}", i);
            mentee.issues.push(issue);
        }
        let bytes = mentee_report(&mentee).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
