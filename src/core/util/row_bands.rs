use std::num::NonZeroU32;
use std::ops::Range;

/// Splits the rows of a frame into consecutive bands of `rows_per_band`
/// rows. The final band is shorter when the height is not an exact
/// multiple. A band size at or above the height yields a single band
/// covering the whole frame.
pub fn row_bands(height: u32, rows_per_band: NonZeroU32) -> impl Iterator<Item = Range<u32>> {
    let step = rows_per_band.get();

    (0..height)
        .step_by(step as usize)
        .map(move |start| start..start.saturating_add(step).min(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_bands(height: u32, rows_per_band: u32) -> Vec<Range<u32>> {
        row_bands(height, NonZeroU32::new(rows_per_band).unwrap()).collect()
    }

    #[test]
    fn test_exact_multiple_gives_equal_bands() {
        let bands = collect_bands(12, 4);

        assert_eq!(bands, vec![0..4, 4..8, 8..12]);
    }

    #[test]
    fn test_final_band_is_shortened() {
        let bands = collect_bands(10, 3);

        assert_eq!(bands, vec![0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn test_band_size_above_height_gives_single_band() {
        let bands = collect_bands(10, 100);

        assert_eq!(bands, vec![0..10]);
    }

    #[test]
    fn test_band_size_equal_to_height_gives_single_band() {
        let bands = collect_bands(10, 10);

        assert_eq!(bands, vec![0..10]);
    }

    #[test]
    fn test_band_size_one_gives_one_band_per_row() {
        let bands = collect_bands(4, 1);

        assert_eq!(bands, vec![0..1, 1..2, 2..3, 3..4]);
    }

    #[test]
    fn test_band_ends_saturate_near_the_u32_limit() {
        let bands = collect_bands(u32::MAX, u32::MAX - 1);

        assert_eq!(bands, vec![0..u32::MAX - 1, u32::MAX - 1..u32::MAX]);
    }

    #[test]
    fn test_bands_cover_all_rows_without_overlap() {
        for rows_per_band in 1..=20 {
            let bands = collect_bands(17, rows_per_band);
            let mut rows: Vec<u32> = Vec::new();
            for band in &bands {
                rows.extend(band.clone());
            }

            let expected: Vec<u32> = (0..17).collect();
            assert_eq!(rows, expected, "rows_per_band {rows_per_band}");
        }
    }
}
