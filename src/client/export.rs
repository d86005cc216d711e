//! Writes selected admin submissions to an `.xlsx` workbook and hands it to
//! the browser as a download.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::model::export::{ExportCell, ExportRow, COLUMNS, SHEET_NAME};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Xlsx(#[from] XlsxError),
    #[error("Failed to start download: {0}")]
    Download(String),
}

/// Single sheet workbook with a bold header row followed by `rows`.
pub fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, *width)?;
        worksheet.write_string_with_format(0, col, *title, &header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, cell) in row.cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                ExportCell::Number(value) => worksheet.write_number(row_num, col, *value)?,
                ExportCell::Text(value) => worksheet.write_string(row_num, col, value)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(feature = "web")]
pub fn download_xlsx(file_name: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
    use dioxus::prelude::document;

    let eval = document::eval(
        r#"
        const [name, bytes] = await dioxus.recv();
        const blob = new Blob([new Uint8Array(bytes)], {
            type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        });
        const url = URL.createObjectURL(blob);
        const link = document.createElement("a");
        link.href = url;
        link.download = name;
        document.body.appendChild(link);
        link.click();
        link.remove();
        URL.revokeObjectURL(url);
        "#,
    );

    eval.send((file_name, bytes))
        .map_err(|e| ExportError::Download(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_zip_container() {
        let rows = vec![ExportRow {
            cells: vec![
                ExportCell::Number(1.0),
                ExportCell::Text("On Device AI".to_string()),
            ],
        }];

        let bytes = build_workbook(&rows).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_export_still_has_headers() {
        let bytes = build_workbook(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
