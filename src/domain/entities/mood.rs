/// Classification of the 24h percentage change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Pumping,
    RisingSteadily,
    Calm,
    Dipping,
    Crashing,
}

impl Mood {
    /// Bands are checked top-down, first match wins:
    /// `>= 5`, `>= 1`, `> -1`, `> -5`, everything else.
    /// So -1 is already dipping and -5 is already crashing.
    pub fn classify(change_percent: f64) -> Self {
        if change_percent >= 5.0 {
            Mood::Pumping
        } else if change_percent >= 1.0 {
            Mood::RisingSteadily
        } else if change_percent > -1.0 {
            Mood::Calm
        } else if change_percent > -5.0 {
            Mood::Dipping
        } else {
            Mood::Crashing
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Pumping => "🟢",
            Mood::RisingSteadily => "📈",
            Mood::Calm => "🟡",
            Mood::Dipping => "🔻",
            Mood::Crashing => "🔴",
        }
    }

    /// Short phrase including its closing punctuation
    pub fn phrase(&self) -> &'static str {
        match self {
            Mood::Pumping => "is pumping!",
            Mood::RisingSteadily => "is rising steadily.",
            Mood::Calm => "is calm.",
            Mood::Dipping => "is dipping.",
            Mood::Crashing => "is crashing!",
        }
    }
}
