use crate::{quantity::KilowattHours, tariff::Day};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Caller-input problems. None of them are environmental: retrying never helps.
#[derive(Clone, Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// No segment of the plan covers the hour, not even an every-day catch-all.
    #[display("plan `{plan_id}` has no rate for {day} {hour:02}:00")]
    UnresolvedRate { plan_id: String, day: Day, hour: u8 },

    #[display("invalid usage shape: {reason}")]
    InvalidUsageShape { reason: String },

    #[display("invalid plan `{plan_id}`: {reason}")]
    InvalidPlan { plan_id: String, reason: String },

    #[display("invalid target daily usage: {target}")]
    InvalidTarget { target: KilowattHours },
}

impl Error {
    pub(crate) fn usage_shape(reason: impl Into<String>) -> Self {
        Self::InvalidUsageShape { reason: reason.into() }
    }

    pub(crate) fn plan(plan_id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPlan { plan_id: plan_id.to_owned(), reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_rate_message() {
        let error = Error::UnresolvedRate { plan_id: "gappy".to_owned(), day: Day::Tue, hour: 7 };
        assert_eq!(error.to_string(), "plan `gappy` has no rate for Tue 07:00");
    }
}
