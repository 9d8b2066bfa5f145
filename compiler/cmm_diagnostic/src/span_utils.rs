//! Line and column lookup for byte offsets.
//!
//! Spans carry byte offsets only. [`LineOffsetTable`] is built once per
//! source and answers position queries in O(log L).

/// Byte offset of every line start in a source text.
///
/// # Example
///
/// ```
/// use cmm_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "xs[true]\nnot 5";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 3), (1, 4));
/// assert_eq!(table.offset_to_line_col(source, 13), (2, 5));
/// assert_eq!(table.line_text(source, 2), "not 5");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0] == 0`; one entry per `\n`, pointing past it.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .match_indices('\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 0-based index of the line containing `offset`.
    fn line_index(&self, offset: u32) -> usize {
        self.offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    fn line_start(&self, index: usize) -> usize {
        self.offsets.get(index).map_or(0, |&start| start as usize)
    }

    /// 1-based `(line, column)` of a byte offset.
    ///
    /// The column counts characters, not bytes. Offsets past the end are
    /// clamped to the end of the source.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let index = self.line_index(offset);
        let end = (offset as usize).min(source.len());
        let column = source
            .get(self.line_start(index)..end)
            .map_or(0, |text| text.chars().count());

        (
            u32::try_from(index + 1).unwrap_or(u32::MAX),
            u32::try_from(column + 1).unwrap_or(u32::MAX),
        )
    }

    /// Text of 1-based `line` without its line break; empty past the end.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let index = (line as usize).saturating_sub(1);
        if index >= self.offsets.len() {
            return "";
        }
        let end = self
            .offsets
            .get(index + 1)
            .map_or(source.len(), |&next| next as usize);
        source
            .get(self.line_start(index)..end)
            .unwrap_or("")
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
    }
}
