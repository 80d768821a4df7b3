//! Word (.docx) text extraction: unzip `word/document.xml` and walk its runs.
//!
//! Each `<w:p>` paragraph becomes one line; `<w:tab/>` and `<w:br/>` map to a tab and
//! a newline. Styling, tables and headers/footers are ignored.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extract::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::ExtractionFailed(format!("not a Word document: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::ExtractionFailed(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("{DOCUMENT_PART}: {e}")))?;
    document_text(&xml)
}

fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::ExtractionFailed(format!("bad XML text: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

/// Builds a minimal .docx holding one paragraph per entry.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}
