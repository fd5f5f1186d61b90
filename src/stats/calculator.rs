//! Statistics Calculator Module
//! Welch's t-test comparing rentals on working days and holidays.
//!
//! Group moments come from one polars group-by; only the test statistic and
//! the Student's t tail are computed here.

use crate::data::schema::{CNT, HOLIDAY};
use polars::prelude::*;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Significance threshold for t-test
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

const MEAN: &str = "mean";
const VARIANCE: &str = "variance";
const COUNT: &str = "count";

/// Count, mean and sample variance (ddof = 1) of one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMoments {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

impl GroupMoments {
    /// A group with no rows.
    pub const EMPTY: GroupMoments = GroupMoments {
        count: 0,
        mean: f64::NAN,
        variance: f64::NAN,
    };

    /// Variance of the group mean.
    fn mean_variance(&self) -> f64 {
        self.variance / self.count as f64
    }
}

/// Working day vs holiday usage, with the test result.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayComparison {
    pub working_day_mean: f64,
    pub holiday_mean: f64,
    pub working_day_count: usize,
    pub holiday_count: usize,
    pub p_value: f64,
    pub is_significant: bool,
}

impl HolidayComparison {
    /// True when working days see more rentals on average.
    pub fn working_days_busier(&self) -> bool {
        self.working_day_mean > self.holiday_mean
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Two-tailed Welch's t-test (unequal variances) from group moments.
    /// Returns `(p_value, is_significant)`; NaN when either group has fewer than two rows.
    pub fn welch_ttest(a: &GroupMoments, b: &GroupMoments) -> (f64, bool) {
        if a.count < 2 || b.count < 2 {
            return (f64::NAN, false);
        }

        let (va, vb) = (a.mean_variance(), b.mean_variance());
        let se_sq = va + vb;
        if se_sq == 0.0 {
            // Both groups constant: either identical or perfectly separated
            return if a.mean == b.mean {
                (1.0, false)
            } else {
                (0.0, true)
            };
        }

        let t = (a.mean - b.mean) / se_sq.sqrt();
        // Welch-Satterthwaite degrees of freedom
        let dof = se_sq.powi(2)
            / (va.powi(2) / (a.count - 1) as f64 + vb.powi(2) / (b.count - 1) as f64);

        match StudentsT::new(0.0, 1.0, dof) {
            Ok(dist) => {
                let p_value = 2.0 * (1.0 - dist.cdf(t.abs()));
                (p_value, p_value <= SIGNIFICANCE_THRESHOLD)
            }
            Err(_) => (f64::NAN, false),
        }
    }

    /// Moments of `cnt` for (working days, holidays). Rows with a null holiday flag are ignored.
    pub fn holiday_moments(df: &DataFrame) -> PolarsResult<(GroupMoments, GroupMoments)> {
        let value = || col(CNT).cast(DataType::Float64);
        let moments = df
            .clone()
            .lazy()
            .group_by([col(HOLIDAY)])
            .agg([
                value().mean().alias(MEAN),
                value().var(1).alias(VARIANCE),
                value().count().cast(DataType::UInt64).alias(COUNT),
            ])
            .collect()?;

        let flags = moments.column(HOLIDAY)?.bool()?;
        let means = moments.column(MEAN)?.f64()?;
        let variances = moments.column(VARIANCE)?.f64()?;
        let counts = moments.column(COUNT)?.u64()?;

        let (mut working, mut holiday) = (GroupMoments::EMPTY, GroupMoments::EMPTY);
        for i in 0..moments.height() {
            let group = GroupMoments {
                count: counts.get(i).unwrap_or(0) as usize,
                mean: means.get(i).unwrap_or(f64::NAN),
                variance: variances.get(i).unwrap_or(f64::NAN),
            };
            match flags.get(i) {
                Some(true) => holiday = group,
                Some(false) => working = group,
                None => {}
            }
        }
        Ok((working, holiday))
    }

    /// Compare working-day and holiday rentals of a normalized table.
    pub fn compare_holiday_usage(df: &DataFrame) -> PolarsResult<HolidayComparison> {
        let (working, holiday) = Self::holiday_moments(df)?;
        let (p_value, is_significant) = Self::welch_ttest(&working, &holiday);

        Ok(HolidayComparison {
            working_day_mean: working.mean,
            holiday_mean: holiday.mean,
            working_day_count: working.count,
            holiday_count: holiday.count,
            p_value,
            is_significant,
        })
    }
}
