//! XLSX workbook writer
//!
//! Builds a single-sheet workbook with rust_xlsxwriter: a header row, one
//! row per paragraph, fixed column widths and taller wrapped data rows.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::ordinals::ordinal;
use super::types::{ExportSummary, Result, SheetLayout, ORDINAL_HEADER, PARAGRAPH_HEADER};

const ORDINAL_COL: u16 = 0;
const PARAGRAPH_COL: u16 = 1;

/// Writes (ordinal, paragraph) rows into an `.xlsx` file
#[derive(Debug, Clone, Default)]
pub struct XlsxExporter {
    layout: SheetLayout,
}

impl XlsxExporter {
    /// Create an exporter with the given layout
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    /// Current layout
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Write the header row plus one row per paragraph to `path`
    pub fn export<S: AsRef<str>>(&self, paragraphs: &[S], path: &Path) -> Result<ExportSummary> {
        let layout = &self.layout;
        let paragraph_format = if layout.wrap_text {
            Format::new().set_text_wrap()
        } else {
            Format::new()
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(layout.sheet_name.as_str())?;
        worksheet.set_column_width(ORDINAL_COL, layout.ordinal_width)?;
        worksheet.set_column_width(PARAGRAPH_COL, layout.paragraph_width)?;

        worksheet.write_string(0, ORDINAL_COL, ORDINAL_HEADER)?;
        worksheet.write_string(0, PARAGRAPH_COL, PARAGRAPH_HEADER)?;

        for (idx, paragraph) in paragraphs.iter().enumerate() {
            let row = (idx + 1) as u32;
            worksheet.write_string(row, ORDINAL_COL, ordinal(idx + 1).as_str())?;
            worksheet.write_string_with_format(
                row,
                PARAGRAPH_COL,
                paragraph.as_ref(),
                &paragraph_format,
            )?;
            worksheet.set_row_height(row, layout.row_height)?;
        }

        workbook.save(path)?;

        tracing::info!(path = %path.display(), rows = paragraphs.len(), "wrote workbook");
        Ok(ExportSummary {
            path: path.to_path_buf(),
            rows: paragraphs.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportError;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::fs::File;
    use std::io::Read;
    use tempfile::tempdir;

    fn read_rows(path: &Path, sheet: &str) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    fn read_part(path: &Path, name: &str) -> String {
        let file = File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    /// The `<col .../>` element for a 1-based column
    fn col_element(sheet_xml: &str, col: u32) -> String {
        let marker = format!("<col min=\"{col}\" max=\"{col}\"");
        let start = sheet_xml.find(&marker).unwrap();
        let end = start + sheet_xml[start..].find("/>").unwrap();
        sheet_xml[start..end].to_string()
    }

    #[test]
    fn test_export_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let summary = XlsxExporter::default()
            .export(&["Alpha.", "Beta."], &path)
            .unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.path, path);
        assert_eq!(
            read_rows(&path, "Paragraphs"),
            vec![
                vec!["Ordinal", "Paragraph"],
                vec!["1st", "Alpha."],
                vec!["2nd", "Beta."],
            ]
        );
    }

    #[test]
    fn test_layout_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        XlsxExporter::default()
            .export(&["Alpha.", "Beta."], &path)
            .unwrap();

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert!(col_element(&sheet, 1).contains("width=\"15"));
        assert!(col_element(&sheet, 2).contains("width=\"80"));
        assert_eq!(sheet.matches("ht=\"60\"").count(), 2);

        let styles = read_part(&path, "xl/styles.xml");
        assert!(styles.contains("wrapText=\"1\""));
    }

    #[test]
    fn test_no_wrap_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.xlsx");
        let layout = SheetLayout::builder()
            .wrap_text(false)
            .row_height(30.0)
            .build();
        XlsxExporter::new(layout).export(&["Alpha."], &path).unwrap();

        let styles = read_part(&path, "xl/styles.xml");
        assert!(!styles.contains("wrapText"));
        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("ht=\"30\""));
    }

    #[test]
    fn test_empty_paragraphs_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        let paragraphs: Vec<String> = Vec::new();
        let summary = XlsxExporter::default().export(&paragraphs, &path).unwrap();

        assert_eq!(summary.rows, 0);
        assert_eq!(
            read_rows(&path, "Paragraphs"),
            vec![vec!["Ordinal", "Paragraph"]]
        );
    }

    #[test]
    fn test_markup_characters_survive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("escaped.xlsx");
        XlsxExporter::default()
            .export(&["Fish & <chips> \"now\""], &path)
            .unwrap();

        let rows = read_rows(&path, "Paragraphs");
        assert_eq!(rows[1][1], "Fish & <chips> \"now\"");
    }

    #[test]
    fn test_custom_sheet_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("named.xlsx");
        let layout = SheetLayout::builder().sheet_name("Chapter: 1").build();
        XlsxExporter::new(layout).export(&["Alpha."], &path).unwrap();

        assert_eq!(read_rows(&path, "Chapter 1")[1], vec!["1st", "Alpha."]);
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        let result = XlsxExporter::default().export(&["Alpha."], &path);
        assert!(matches!(result, Err(ExportError::IoError(_))));
    }

    #[test]
    fn test_oversized_cell_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.xlsx");
        let huge = "x".repeat(40_000);
        let result = XlsxExporter::default().export(&[huge], &path);
        assert!(matches!(result, Err(ExportError::Workbook(_))));
        assert!(!path.exists());
    }
}
