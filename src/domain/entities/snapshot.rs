use std::fmt;

/// 24h trading statistics for one symbol, as returned by a single fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub price: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub change_percent_24h: f64,
}

/// Returned when a snapshot would hold a non-finite value
#[derive(Debug, Clone, PartialEq)]
pub struct NonFiniteField {
    pub field: &'static str,
    pub value: f64,
}

impl fmt::Display for NonFiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not finite: {}", self.field, self.value)
    }
}

impl std::error::Error for NonFiniteField {}

impl StatsSnapshot {
    pub fn new(
        price: f64,
        high_24h: f64,
        low_24h: f64,
        change_percent_24h: f64,
    ) -> Result<Self, NonFiniteField> {
        for (field, value) in [
            ("price", price),
            ("high_24h", high_24h),
            ("low_24h", low_24h),
            ("change_percent_24h", change_percent_24h),
        ] {
            if !value.is_finite() {
                return Err(NonFiniteField { field, value });
            }
        }

        Ok(Self {
            price,
            high_24h,
            low_24h,
            change_percent_24h,
        })
    }
}
