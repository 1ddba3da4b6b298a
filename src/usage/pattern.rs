use serde::{Deserialize, Serialize};

use crate::{HOURS_PER_DAY, usage::DailyUsage};

/// Typical household shapes, hour 0 first. Only the proportions matter.
#[derive(Debug, Hash, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum UsagePattern {
    /// Morning and evening peaks.
    Standard,

    /// Away during the working day.
    #[serde(alias = "working-pro")]
    Working,

    /// Steady daytime usage from working at home.
    #[value(alias = "wfh")]
    #[serde(alias = "wfh")]
    HomeOffice,

    /// Overnight car charging.
    #[value(alias = "ev")]
    #[serde(alias = "ev")]
    EvDriver,

    /// Late evenings into the small hours.
    #[value(alias = "nightowl")]
    #[serde(alias = "nightowl")]
    NightOwl,
}

impl UsagePattern {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Working => "Working Pro",
            Self::HomeOffice => "Home Office",
            Self::EvDriver => "EV Driver",
            Self::NightOwl => "Night Owl",
        }
    }

    pub const fn shape(self) -> DailyUsage {
        DailyUsage::from_trusted(self.raw_shape())
    }

    #[rustfmt::skip]
    const fn raw_shape(self) -> [f64; HOURS_PER_DAY] {
        match self {
            Self::Standard => [
                0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 0.6, 1.2, 1.0, 0.6, 0.5, 0.5,
                0.5, 0.5, 0.6, 0.8, 1.0, 1.5, 1.5, 1.2, 0.8, 0.6, 0.4, 0.3,
            ],
            Self::Working => [
                0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 1.0, 1.2, 0.2, 0.2, 0.2, 0.2,
                0.2, 0.2, 0.2, 0.3, 0.5, 1.5, 1.8, 1.5, 1.0, 0.8, 0.4, 0.3,
            ],
            Self::HomeOffice => [
                0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 0.5, 0.8, 1.0, 1.1, 1.1, 1.2,
                1.2, 1.1, 1.0, 0.9, 1.0, 1.5, 1.6, 1.3, 1.0, 0.8, 0.4, 0.3,
            ],
            Self::EvDriver => [
                2.5, 2.5, 2.5, 2.5, 0.2, 0.3, 0.8, 1.2, 0.5, 0.4, 0.4, 0.4,
                0.4, 0.4, 0.5, 0.6, 0.9, 1.8, 1.8, 1.5, 1.0, 0.8, 0.4, 0.3,
            ],
            Self::NightOwl => [
                1.0, 1.2, 1.0, 0.4, 0.2, 0.2, 0.2, 0.3, 0.4, 0.5, 0.5, 0.6,
                0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.5, 1.5, 1.5, 1.2, 1.0,
            ],
        }
    }
}
