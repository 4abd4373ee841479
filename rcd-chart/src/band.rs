//! Plot band checks and lookups.
//!
//! Bands are an overlay only. They are drawn in ascending `low` order and
//! never clip or move a series value, even one outside every band.

use crate::chart_spec::Band;
use crate::error::BandFault;

/// Check that bands are finite, not inverted, ascending by `low`, and do not
/// overlap. Touching bands (`[0, 40]` then `[40, 50]`) are fine; a zero-width
/// band shares its single value with any band starting there.
pub fn check_bands(bands: &[Band]) -> Result<(), BandFault> {
    for band in bands {
        if !band.low.is_finite() || !band.high.is_finite() {
            return Err(BandFault::NonFinite {
                label: band.label.clone(),
            });
        }
        if band.low > band.high {
            return Err(BandFault::Inverted {
                label: band.label.clone(),
                low: band.low,
                high: band.high,
            });
        }
    }

    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.low < prev.low {
            return Err(BandFault::OutOfOrder {
                label: next.label.clone(),
            });
        }
        let same_point = prev.low == prev.high && next.low == prev.low;
        if next.low < prev.high || same_point {
            return Err(BandFault::Overlap {
                first: prev.label.clone(),
                second: next.label.clone(),
            });
        }
    }
    Ok(())
}

/// Band a value falls into, if any.
///
/// Ranges are half-open (`low <= v < high`) except the top band, which
/// includes its upper bound so that 100% efficiency still reads "Excellent".
pub fn band_for(bands: &[Band], value: f64) -> Option<&Band> {
    let last = bands.len().checked_sub(1)?;
    bands.iter().enumerate().find_map(|(i, band)| {
        let below_high = value < band.high || (i == last && value == band.high);
        (value >= band.low && below_high).then_some(band)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn efficiency_bands() -> Vec<Band> {
        vec![
            Band::new(0.0, 40.0, "Poor"),
            Band::new(40.0, 50.0, "Fair"),
            Band::new(50.0, 75.0, "Good"),
            Band::new(75.0, 100.0, "Excellent"),
        ]
    }

    #[test]
    fn test_ascending_bands_accepted() {
        assert_eq!(check_bands(&efficiency_bands()), Ok(()));
        assert_eq!(check_bands(&[]), Ok(()));
    }

    #[test]
    fn test_out_of_order_rejected() {
        let mut bands = efficiency_bands();
        bands.swap(0, 1);
        assert_eq!(
            check_bands(&bands),
            Err(BandFault::OutOfOrder {
                label: "Poor".to_string()
            })
        );
    }

    #[test]
    fn test_overlap_rejected() {
        let bands = vec![Band::new(0.0, 45.0, "Poor"), Band::new(40.0, 50.0, "Fair")];
        assert_eq!(
            check_bands(&bands),
            Err(BandFault::Overlap {
                first: "Poor".to_string(),
                second: "Fair".to_string()
            })
        );
    }

    #[test]
    fn test_zero_width_bands_on_one_value_overlap() {
        let bands = vec![Band::new(40.0, 40.0, "Edge"), Band::new(40.0, 40.0, "Edge again")];
        assert_eq!(
            check_bands(&bands),
            Err(BandFault::Overlap {
                first: "Edge".to_string(),
                second: "Edge again".to_string()
            })
        );
        let marker_then_band = vec![Band::new(40.0, 40.0, "Edge"), Band::new(40.0, 50.0, "Fair")];
        assert!(matches!(check_bands(&marker_then_band), Err(BandFault::Overlap { .. })));
        let touching = vec![Band::new(0.0, 40.0, "Poor"), Band::new(40.0, 40.0, "Edge")];
        assert_eq!(check_bands(&touching), Ok(()));
    }

    #[test]
    fn test_inverted_and_non_finite_rejected() {
        assert!(matches!(
            check_bands(&[Band::new(50.0, 10.0, "Backwards")]),
            Err(BandFault::Inverted { .. })
        ));
        assert!(matches!(
            check_bands(&[Band::new(0.0, f64::NAN, "Broken")]),
            Err(BandFault::NonFinite { .. })
        ));
    }

    #[test]
    fn test_band_lookup() {
        let bands = efficiency_bands();
        assert_eq!(band_for(&bands, 10.0).map(|b| b.label.as_str()), Some("Poor"));
        assert_eq!(band_for(&bands, 40.0).map(|b| b.label.as_str()), Some("Fair"));
        assert_eq!(band_for(&bands, 100.0).map(|b| b.label.as_str()), Some("Excellent"));
        assert_eq!(band_for(&bands, 140.0), None);
        assert_eq!(band_for(&bands, -1.0), None);
        assert_eq!(band_for(&[], 10.0), None);
    }
}
