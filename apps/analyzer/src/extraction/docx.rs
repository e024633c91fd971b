//! DOCX text extraction from `word/document.xml`.
//!
//! Output order: every top-level body paragraph (one per line), then every
//! top-level table, row-major, cells space-joined and rows newline-joined.
//! Tables are appended after all paragraphs rather than interleaved; section
//! detection downstream was tuned against that line order.

use std::io::{Cursor, Read};
use std::mem;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::{AnalyzerError, AnalyzerResult};

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> AnalyzerResult<String> {
    let xml = read_document_part(bytes)
        .map_err(|e| AnalyzerError::extraction(format!("error reading DOCX: {e:#}")))?;
    let body = parse_body(&xml)
        .map_err(|e| AnalyzerError::extraction(format!("error reading DOCX: {e:#}")))?;
    Ok(body.render())
}

fn read_document_part(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a valid DOCX archive")?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("archive has no {DOCUMENT_PART}"))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .with_context(|| format!("{DOCUMENT_PART} is not valid UTF-8"))?;
    Ok(xml)
}

type Table = Vec<Vec<String>>;

#[derive(Debug, Default)]
struct DocxBody {
    paragraphs: Vec<String>,
    tables: Vec<Table>,
}

impl DocxBody {
    fn render(&self) -> String {
        let mut text = String::new();
        for paragraph in &self.paragraphs {
            text.push_str(paragraph);
            text.push('\n');
        }
        for table in &self.tables {
            for row in table {
                for cell in row {
                    text.push_str(cell);
                    text.push(' ');
                }
                text.push('\n');
            }
        }
        text
    }
}

/// Streams the WordprocessingML body. Only top-level tables are kept; cell
/// text is the cell's paragraphs joined by newlines.
fn parse_body(xml: &str) -> Result<DocxBody> {
    let mut reader = Reader::from_str(xml);
    let mut body = DocxBody::default();

    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut in_text_run = false;
    let mut paragraph = String::new();
    let mut cell_paragraphs: Vec<String> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut table: Table = Vec::new();

    loop {
        match reader
            .read_event()
            .with_context(|| format!("malformed {DOCUMENT_PART} at byte {}", reader.buffer_position()))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"tr" if table_depth == 1 => row.clear(),
                b"tc" if table_depth == 1 => cell_paragraphs.clear(),
                b"p" => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 {
                        paragraph.clear();
                    }
                }
                b"t" => in_text_run = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if paragraph_depth > 0 => paragraph.push('\t'),
                b"br" | b"cr" if paragraph_depth > 0 => paragraph.push('\n'),
                b"p" if paragraph_depth == 0 => match table_depth {
                    0 => body.paragraphs.push(String::new()),
                    1 => cell_paragraphs.push(String::new()),
                    _ => {}
                },
                _ => {}
            },
            Event::Text(t) if in_text_run && paragraph_depth > 0 => {
                let text = t.unescape().context("invalid XML escape in text run")?;
                paragraph.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => {
                    if paragraph_depth == 1 {
                        let finished = mem::take(&mut paragraph);
                        match table_depth {
                            0 => body.paragraphs.push(finished),
                            1 => cell_paragraphs.push(finished),
                            _ => {}
                        }
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                b"tc" if table_depth == 1 => row.push(cell_paragraphs.join("\n")),
                b"tr" if table_depth == 1 => table.push(mem::take(&mut row)),
                b"tbl" => {
                    if table_depth == 1 {
                        body.tables.push(mem::take(&mut table));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(body)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{docx_with_body, paragraph, table};
    use super::*;

    #[test]
    fn test_paragraphs_in_document_order() {
        let body = format!("{}{}", paragraph("Jane Doe"), paragraph("Experience"));
        let text = extract_docx_text(&docx_with_body(&body)).unwrap();
        assert_eq!(text, "Jane Doe\nExperience\n");
    }

    #[test]
    fn test_tables_appended_after_paragraphs() {
        let body = format!(
            "{}{}{}",
            paragraph("Header"),
            table(&[&["Python", "Rust"], &["AWS", "Docker"]]),
            paragraph("Footer")
        );
        let text = extract_docx_text(&docx_with_body(&body)).unwrap();
        assert_eq!(text, "Header\nFooter\nPython Rust \nAWS Docker \n");
    }

    #[test]
    fn test_runs_are_concatenated_and_unescaped() {
        let body = "<w:p><w:r><w:t>R&amp;D </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>";
        let text = extract_docx_text(&docx_with_body(body)).unwrap();
        assert_eq!(text, "R&D Engineer\n");
    }

    #[test]
    fn test_tabs_and_breaks_inside_paragraph() {
        let body = "<w:p><w:r><w:t>2019</w:t><w:tab/><w:t>Acme</w:t><w:br/><w:t>Developer</w:t></w:r></w:p>";
        let text = extract_docx_text(&docx_with_body(body)).unwrap();
        assert_eq!(text, "2019\tAcme\nDeveloper\n");
    }

    #[test]
    fn test_empty_paragraph_keeps_blank_line() {
        let body = format!("{}<w:p/>{}", paragraph("A"), paragraph("B"));
        let text = extract_docx_text(&docx_with_body(&body)).unwrap();
        assert_eq!(text, "A\n\nB\n");
    }

    #[test]
    fn test_multi_paragraph_cell_joined_with_newline() {
        let cell = format!("<w:tc>{}{}</w:tc>", paragraph("line one"), paragraph("line two"));
        let body = format!("<w:tbl><w:tr>{cell}</w:tr></w:tbl>");
        let text = extract_docx_text(&docx_with_body(&body)).unwrap();
        assert_eq!(text, "line one\nline two \n");
    }

    #[test]
    fn test_not_a_zip_fails() {
        let err = extract_docx_text(b"plain text, not a docx").unwrap_err();
        assert!(matches!(err, AnalyzerError::ExtractionFailure { .. }));
    }

    #[test]
    fn test_archive_without_document_part_fails() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("docProps/core.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<cp:coreProperties/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }
}
