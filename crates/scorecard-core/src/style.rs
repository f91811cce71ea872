//! The fixed style registry
//!
//! The scorecard workbook uses a fixed palette of twelve cell formats. Cells
//! reference them by [`StyleId`]; the XLSX writer emits the matching
//! `cellXfs` entries in registry order, so [`StyleId::xf_index`] doubles as
//! the `s` attribute on serialized cells.

/// A cell format from the fixed registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleId {
    /// Plain cell, no border or number format
    #[default]
    Default,
    /// Sheet title (bold, 12pt)
    Title,
    /// Table header (bold, filled, centered, wrapped)
    Header,
    /// Row label (bold, bordered)
    Label,
    /// Manual-entry cell (light fill, right-aligned)
    Input,
    /// Plain bordered text
    Text,
    /// Integer with thousands separator
    Int,
    /// Whole-dollar currency (`$#,##0`)
    Currency,
    /// Percentage with one decimal (`0.0%`)
    Percent,
    /// Date (`m/d/yyyy` builtin)
    Date,
    /// Wrapped text
    Wrap,
    /// Totals row (bold, right-aligned)
    Total,
}

impl StyleId {
    /// Index into the `cellXfs` table of the styles part
    pub fn xf_index(self) -> u32 {
        match self {
            StyleId::Default => 0,
            StyleId::Title => 1,
            StyleId::Header => 2,
            StyleId::Label => 3,
            StyleId::Input => 4,
            StyleId::Text => 5,
            StyleId::Int => 6,
            StyleId::Currency => 7,
            StyleId::Percent => 8,
            StyleId::Date => 9,
            StyleId::Wrap => 10,
            StyleId::Total => 11,
        }
    }

    /// Whether this is the default format (omitted from serialized cells)
    pub fn is_default(self) -> bool {
        self == StyleId::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xf_indices_are_contiguous() {
        let all = [
            StyleId::Default,
            StyleId::Title,
            StyleId::Header,
            StyleId::Label,
            StyleId::Input,
            StyleId::Text,
            StyleId::Int,
            StyleId::Currency,
            StyleId::Percent,
            StyleId::Date,
            StyleId::Wrap,
            StyleId::Total,
        ];
        for (i, style) in all.iter().enumerate() {
            assert_eq!(style.xf_index(), i as u32);
        }
    }
}
