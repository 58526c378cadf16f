/// A horizontal run of columns sharing traced samples.
///
/// Rendering walks a row three columns at a time: the outer two columns of
/// each triple are traced and the middle one is reconstructed from their
/// average. Columns left over when the width is not a multiple of three are
/// traced directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnGroup {
    Interpolated { left: u32, mid: u32, right: u32 },
    Direct { x: u32 },
}

pub fn column_groups(width: u32) -> impl Iterator<Item = ColumnGroup> {
    let triples = width / 3;
    let remainder_start = triples * 3;

    (0..triples)
        .map(|i| {
            let left = i * 3;
            ColumnGroup::Interpolated {
                left,
                mid: left + 1,
                right: left + 2,
            }
        })
        .chain((remainder_start..width).map(|x| ColumnGroup::Direct { x }))
}
