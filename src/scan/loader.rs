//! Page-by-page text access to source documents.

use crate::error::{AuditError, Result};
use lopdf::Document;
use std::path::Path;

/// Separates pages in plain-text dumps, as written by `pdftotext`.
pub const PAGE_BREAK: char = '\u{0C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("txt") => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

enum PageSource {
    Pdf {
        document: Document,
        page_numbers: std::vec::IntoIter<u32>,
    },
    Text {
        pages: std::vec::IntoIter<String>,
    },
}

/// Single-pass iterator over the first pages of a document.
///
/// PDF pages are extracted lazily, so an unreadable page surfaces only when reached.
pub struct PageReader {
    source: PageSource,
}

pub fn open_pages(path: &Path, max_pages: usize) -> Result<PageReader> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| AuditError::UnsupportedDocument(path.display().to_string()))?;

    let source = match kind {
        DocumentKind::Pdf => {
            let document = Document::load(path)?;
            let page_numbers = document
                .get_pages()
                .into_keys()
                .take(max_pages)
                .collect::<Vec<_>>();
            PageSource::Pdf {
                document,
                page_numbers: page_numbers.into_iter(),
            }
        }
        DocumentKind::Text => {
            let content = std::fs::read_to_string(path)?;
            let pages = content
                .split(PAGE_BREAK)
                .take(max_pages)
                .map(str::to_string)
                .collect::<Vec<_>>();
            PageSource::Text {
                pages: pages.into_iter(),
            }
        }
    };

    Ok(PageReader { source })
}

impl Iterator for PageReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            PageSource::Pdf {
                document,
                page_numbers,
            } => {
                let number = page_numbers.next()?;
                Some(document.extract_text(&[number]).map_err(AuditError::from))
            }
            PageSource::Text { pages } => pages.next().map(Ok),
        }
    }
}

#[cfg(test)]
pub(crate) fn write_test_pdf(path: &Path, pages: &[&str]) {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut kids = Vec::new();
    for text in pages {
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content should encode"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("pdf should save");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn document_kind_matches_extension_exactly() {
        assert_eq!(
            DocumentKind::from_path(Path::new("acc.pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("notes.txt")),
            Some(DocumentKind::Text)
        );
        assert_eq!(DocumentKind::from_path(Path::new("scan.PDF")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn text_pages_split_on_form_feed_and_stop_at_limit() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("report.txt");
        fs::write(&path, "one\u{0C}two\u{0C}three\u{0C}four").expect("text should write");

        let pages = open_pages(&path, 3)
            .expect("reader should open")
            .collect::<Result<Vec<_>>>()
            .expect("pages should read");
        assert_eq!(pages, vec!["one", "two", "three"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(open_pages(&dir.path().join("absent.txt"), 10).is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("sheet.xlsx");
        fs::write(&path, "data").expect("file should write");
        let err = open_pages(&path, 10).err().expect("open should fail");
        assert!(err.to_string().contains("unsupported document"));
    }

    #[test]
    fn corrupt_pdf_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.pdf");
        fs::write(&path, "this is not a pdf").expect("file should write");
        assert!(open_pages(&path, 10).is_err());
    }

    #[test]
    fn pdf_pages_are_extracted_up_to_limit() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("report.pdf");
        write_test_pdf(&path, &["CSR Expenditure 120", "Water Policy Yes", "Extra"]);

        let pages = open_pages(&path, 2)
            .expect("reader should open")
            .collect::<Result<Vec<_>>>()
            .expect("pages should read");
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("CSR Expenditure 120"));
        assert!(pages[1].contains("Water Policy Yes"));
    }
}
