//! Heuristic résumé sectionizer.
//!
//! A current-section cursor walks the text line by line. A line containing a
//! section keyword moves the cursor and is itself filed under the new
//! section; all other lines land in whatever section the cursor points at.
//! Keyword tables are bilingual (English/Italian) because the résumés this
//! service was built for come in both.

use serde::Serialize;

/// Section labels in fixed priority order. The first label whose keyword
/// matches wins; `Other` is the catch-all starting section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Profile,
    Experience,
    Education,
    Skills,
    Languages,
    Other,
}

/// Fixed rendering order for sections.
pub const SECTION_ORDER: [Section; 6] = [
    Section::Profile,
    Section::Experience,
    Section::Education,
    Section::Skills,
    Section::Languages,
    Section::Other,
];

impl Section {
    /// Lower-case keywords that move the cursor to this section.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::Profile => &["profilo", "profile", "summary"],
            Section::Experience => &["esperienza", "experience", "lavorativ"],
            Section::Education => &["formazione", "education", "istruzione"],
            Section::Skills => &["competenze", "skills", "capacità"],
            Section::Languages => &["lingue", "languages"],
            Section::Other => &[],
        }
    }

    /// Uppercase header used when rendering the section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Profile => "PROFILE",
            Section::Experience => "EXPERIENCE",
            Section::Education => "EDUCATION",
            Section::Skills => "SKILLS",
            Section::Languages => "LANGUAGES",
            Section::Other => "OTHER",
        }
    }

    /// Tests a lower-cased line against all keyword tables in priority order.
    fn match_line(lower: &str) -> Option<Section> {
        SECTION_ORDER
            .into_iter()
            .find(|section| section.keywords().iter().any(|k| lower.contains(k)))
    }
}

/// Ordered mapping from section labels to the lines assigned to them.
/// Built once per document and never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct SectionedDocument {
    buckets: Vec<(Section, Vec<String>)>,
}

impl SectionedDocument {
    fn new() -> Self {
        Self {
            buckets: SECTION_ORDER
                .into_iter()
                .map(|section| (section, Vec::new()))
                .collect(),
        }
    }

    fn push(&mut self, section: Section, line: &str) {
        if let Some((_, lines)) = self.buckets.iter_mut().find(|(s, _)| *s == section) {
            lines.push(line.to_string());
        }
    }

    /// Lines assigned to one section, in original input order.
    pub fn lines(&self, section: Section) -> &[String] {
        self.buckets
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    /// Renders only non-empty sections, each preceded by an uppercase
    /// header, in fixed label order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (section, lines) in &self.buckets {
            if lines.is_empty() {
                continue;
            }
            out.push_str(&format!("\n--- {} ---\n", section.header()));
            out.push_str(&lines.join("\n"));
            out.push('\n');
        }
        out.trim().to_string()
    }
}

/// Splits raw multi-line text into a `SectionedDocument`.
///
/// Blank lines contribute to no section and do not reset the cursor. Every
/// non-blank line is assigned to exactly one section.
pub fn sectionize(text: &str) -> SectionedDocument {
    let mut doc = SectionedDocument::new();
    let mut current = Section::Other;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_lowercase();
        if let Some(section) = Section::match_line(&lower) {
            current = section;
        }

        doc.push(current, line);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_everything_under_other() {
        let doc = sectionize("alpha\nbeta\ngamma");
        assert_eq!(doc.lines(Section::Other), ["alpha", "beta", "gamma"]);
        for section in SECTION_ORDER.into_iter().filter(|s| *s != Section::Other) {
            assert!(doc.lines(section).is_empty());
        }

        let rendered = doc.render();
        assert_eq!(rendered.matches("---").count(), 2); // one header
        assert!(rendered.starts_with("--- OTHER ---"));
    }

    #[test]
    fn test_keyword_line_lands_in_new_section() {
        let doc = sectionize("Experience\nSenior Engineer at Acme\nSkills\nPython, Design");
        assert_eq!(
            doc.lines(Section::Experience),
            ["Experience", "Senior Engineer at Acme"]
        );
        assert_eq!(doc.lines(Section::Skills), ["Skills", "Python, Design"]);
        assert!(doc.lines(Section::Other).is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped_and_do_not_reset_cursor() {
        let doc = sectionize("Education\n\n   \nMSc Computer Science");
        assert_eq!(
            doc.lines(Section::Education),
            ["Education", "MSc Computer Science"]
        );
    }

    #[test]
    fn test_italian_keywords_recognized() {
        let doc = sectionize("Esperienza lavorativa\nDev at Rome\nCompetenze\nRust");
        assert_eq!(
            doc.lines(Section::Experience),
            ["Esperienza lavorativa", "Dev at Rome"]
        );
        assert_eq!(doc.lines(Section::Skills), ["Competenze", "Rust"]);
    }

    #[test]
    fn test_priority_order_first_matching_label_wins() {
        // "professional experience summary" matches both Profile ("summary")
        // and Experience ("experience"); Profile comes first in priority.
        let doc = sectionize("professional experience summary\ndetails");
        assert_eq!(
            doc.lines(Section::Profile),
            ["professional experience summary", "details"]
        );
        assert!(doc.lines(Section::Experience).is_empty());
    }

    #[test]
    fn test_every_nonblank_line_appears_exactly_once() {
        let input = "intro\nExperience\njob one\nEducation\nschool\nExperience again\njob two";
        let doc = sectionize(input);

        let expected: Vec<&str> = input.lines().collect();
        let mut collected: Vec<String> = Vec::new();
        for section in SECTION_ORDER {
            collected.extend(doc.lines(section).iter().cloned());
        }
        assert_eq!(collected.len(), expected.len());
        for line in expected {
            assert_eq!(collected.iter().filter(|l| l.as_str() == line).count(), 1);
        }
    }

    #[test]
    fn test_render_reproduces_lines_in_order_for_forward_inputs() {
        // Sections appear in label order here, so stripping headers must
        // reproduce the original non-blank lines exactly.
        let input = "Profile\nBuilder of things\nExperience\nSenior Engineer\nSkills\nRust";
        let rendered = sectionize(input).render();
        let body: Vec<&str> = rendered
            .lines()
            .filter(|l| !l.starts_with("---") && !l.is_empty())
            .collect();
        let original: Vec<&str> = input.lines().collect();
        assert_eq!(body, original);
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(sectionize("").render(), "");
        assert_eq!(sectionize("\n\n  \n").render(), "");
    }

    #[test]
    fn test_trailing_whitespace_trimmed_from_lines() {
        let doc = sectionize("  Skills  \n  Rust  ");
        assert_eq!(doc.lines(Section::Skills), ["Skills", "Rust"]);
    }
}
