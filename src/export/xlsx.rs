use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::record::Record;
use crate::export::{Encoder, ExportError, ExportFormat, TITLES, cells};

pub const ENCODER: Encoder = Encoder {
    encode,
    content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    extension: "xlsx",
};

pub fn encode(records: &[Record]) -> Result<Vec<u8>, ExportError> {
    write_workbook(records).map_err(|err| ExportError::encoding(ExportFormat::Excel, err))
}

/// Single "Records" sheet: a bold header row, then one row per record with the
/// identifier stored as a number.
fn write_workbook(records: &[Record]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Records")?;

    for (col, title) in TITLES.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_number(row, 0, f64::from(record.id))?;
        for (col, cell) in cells(record).into_iter().enumerate().skip(1) {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_records;

    #[test]
    fn produces_a_zip_container() {
        let bytes = encode(&sample_records()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
