//! Header detection and column layout.

/// Labels that mark a line as a header. Matched as lowercase substrings.
const HEADER_LABELS: &[&str] = &[
    "name", "barcode", "location", "serial", "名称", "条码", "位置", "序列号", "状态", "备注",
];

/// Column positions of the fields an asset is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: Option<usize>,
    pub barcode: Option<usize>,
    pub location: Option<usize>,
    pub serial_number: Option<usize>,
}

impl Default for ColumnLayout {
    /// Fixed order: name, barcode, location, serial number.
    fn default() -> Self {
        Self {
            name: Some(0),
            barcode: Some(1),
            location: Some(2),
            serial_number: Some(3),
        }
    }
}

impl ColumnLayout {
    /// Layout named by a header row.
    ///
    /// Falls back to the fixed order unless the header identifies both the
    /// name and the barcode column.
    pub fn from_header(header: &[String]) -> Self {
        let mut layout = Self {
            name: None,
            barcode: None,
            location: None,
            serial_number: None,
        };
        for (idx, label) in header.iter().enumerate() {
            let label = label.to_lowercase();
            let slot = if label.contains("barcode") || label.contains("条码") {
                &mut layout.barcode
            } else if label.contains("serial") || label.contains("序列号") {
                &mut layout.serial_number
            } else if label.contains("location") || label.contains("位置") {
                &mut layout.location
            } else if label.contains("name") || label.contains("名称") {
                &mut layout.name
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        if layout.name.is_some() && layout.barcode.is_some() {
            layout
        } else {
            Self::default()
        }
    }
}

/// True when any field contains a recognised column label.
pub fn is_header_row(fields: &[String]) -> bool {
    fields.iter().any(|field| {
        let lower = field.to_lowercase();
        HEADER_LABELS.iter().any(|label| lower.contains(label))
    })
}
