//! Rescaling of a daily usage shape to an exact daily total.
//!
//! The work happens in whole hundredths of a kilowatt-hour so that the hourly values
//! always add up to the requested total, with no floating-point drift.

use itertools::Itertools;

use crate::{
    HOURS_PER_DAY,
    error::{Error, Result},
    quantity::KilowattHours,
    usage::DailyUsage,
};

/// Largest target, in hundredths of a kilowatt-hour, that `f64` shares still represent exactly.
pub const MAX_TARGET_HUNDREDTHS: u64 = 1 << 53;

/// Distribute `target` units over the hours proportionally to `shape`.
///
/// Every hour gets the floor of its proportional share, and the leftover units go to the hours
/// with the largest fractional remainders, the earlier hour winning a tie.
/// The result always sums to `target`, unless the shape is all zeros: then it is all zeros.
/// Targets above [`MAX_TARGET_HUNDREDTHS`] are rejected.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn allocate(shape: &DailyUsage, target: u64) -> Result<[u64; HOURS_PER_DAY]> {
    if target > MAX_TARGET_HUNDREDTHS {
        return Err(Error::InvalidTarget { target: KilowattHours::from_hundredths(target) });
    }
    let mut allocation = [0; HOURS_PER_DAY];
    let total = shape.total().0;
    if total <= 0.0 {
        return Ok(allocation);
    }

    let shares = shape.hourly().map(|kwh| kwh.0 / total * target as f64);
    for (units, share) in allocation.iter_mut().zip(shares) {
        *units = share.floor() as u64;
    }

    // Stable sort keeps the earlier hour first on equal remainders.
    let by_remainder = (0..HOURS_PER_DAY)
        .sorted_by(|&lhs, &rhs| shares[rhs].fract().total_cmp(&shares[lhs].fract()))
        .collect_vec();

    let allocated: u64 = allocation.iter().sum();
    if allocated <= target {
        let leftover = (target - allocated) as usize;
        for &hour in by_remainder.iter().cycle().take(leftover) {
            allocation[hour] += 1;
        }
    } else {
        // Rounding in the shares overshot: take units back from the smallest remainders.
        let mut excess = allocated - target;
        for &hour in by_remainder.iter().rev().cycle() {
            if excess == 0 {
                break;
            }
            if allocation[hour] != 0 {
                allocation[hour] -= 1;
                excess -= 1;
            }
        }
    }
    Ok(allocation)
}

/// Rescale the shape so that it sums to `target` rounded to a hundredth of a kilowatt-hour.
#[expect(clippy::cast_precision_loss)]
pub fn scale(shape: &DailyUsage, target: KilowattHours) -> Result<DailyUsage> {
    if !target.is_finite()
        || target < KilowattHours::ZERO
        || target.0 * 100.0 > MAX_TARGET_HUNDREDTHS as f64
    {
        return Err(Error::InvalidTarget { target });
    }
    Ok(DailyUsage::from_hundredths(allocate(shape, target.to_hundredths())?))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::usage::UsagePattern;

    #[test]
    fn test_allocation_sums_exactly() {
        let shape = UsagePattern::Standard.shape();
        for target in [0, 1, 2000, 12345, 99999] {
            assert_eq!(allocate(&shape, target).unwrap().iter().sum::<u64>(), target, "target: {target}");
        }
    }

    #[test]
    fn test_scaled_usage_sums_to_target() {
        for pattern in [UsagePattern::Standard, UsagePattern::EvDriver, UsagePattern::NightOwl] {
            for target in [0.0, 0.01, 20.0, 123.45, 999.99] {
                let target = KilowattHours(target);
                let scaled = scale(&pattern.shape(), target).unwrap();
                let units: u64 = scaled.hourly().iter().map(|kwh| kwh.to_hundredths()).sum();
                assert_eq!(units, target.to_hundredths());
                assert_abs_diff_eq!(scaled.total().0, target.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_single_unit_goes_to_largest_share() {
        let scaled = allocate(&UsagePattern::Working.shape(), 1).unwrap();
        // 18:00 is the highest hour of the working pattern.
        assert_eq!(scaled[18], 1);
    }

    #[test]
    fn test_ties_go_to_earlier_hour() {
        let allocation = allocate(&DailyUsage::flat(KilowattHours(1.0)), 5).unwrap();
        assert_eq!(&allocation[..6], &[1, 1, 1, 1, 1, 0]);
        assert_eq!(allocation[6..].iter().sum::<u64>(), 0);
    }

    #[test]
    fn test_zero_shape() {
        let scaled = scale(&DailyUsage::ZERO, KilowattHours(12.0)).unwrap();
        assert!(scaled.is_zero());
    }

    #[test]
    fn test_proportions_are_kept() {
        let shape = UsagePattern::Standard.shape();
        let scaled = scale(&shape, KilowattHours(40.0)).unwrap();
        let factor = 40.0 / shape.total().0;
        for (scaled, unscaled) in scaled.hourly().iter().zip(shape.hourly()) {
            assert_abs_diff_eq!(scaled.0, unscaled.0 * factor, epsilon = 0.011);
        }
    }

    #[test]
    fn test_rejects_bad_target() {
        let shape = UsagePattern::Standard.shape();
        assert!(matches!(scale(&shape, KilowattHours(-1.0)), Err(Error::InvalidTarget { .. })));
        assert!(scale(&shape, KilowattHours(f64::INFINITY)).is_err());
        assert!(scale(&shape, KilowattHours(f64::NAN)).is_err());
    }

    #[test]
    fn test_largest_exact_target() {
        for pattern in [UsagePattern::Standard, UsagePattern::EvDriver, UsagePattern::Working] {
            let allocation = allocate(&pattern.shape(), MAX_TARGET_HUNDREDTHS).unwrap();
            assert_eq!(allocation.iter().sum::<u64>(), MAX_TARGET_HUNDREDTHS, "{pattern:?}");
        }
        let scaled = scale(&UsagePattern::Standard.shape(), KilowattHours(9.0e13)).unwrap();
        let units: u64 = scaled.hourly().iter().map(|kwh| kwh.to_hundredths()).sum();
        assert_eq!(units, 9_000_000_000_000_000);
    }

    #[test]
    fn test_rejects_target_beyond_exact_range() {
        let shape = UsagePattern::Standard.shape();
        assert!(matches!(
            allocate(&shape, MAX_TARGET_HUNDREDTHS + 1),
            Err(Error::InvalidTarget { .. })
        ));
        assert!(matches!(allocate(&shape, u64::MAX), Err(Error::InvalidTarget { .. })));
        assert!(matches!(scale(&shape, KilowattHours(5.9e15)), Err(Error::InvalidTarget { .. })));
        assert!(matches!(scale(&shape, KilowattHours(1e18)), Err(Error::InvalidTarget { .. })));
    }
}
