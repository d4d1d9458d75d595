wire_enum! {
    /// Priority label attached to a client. Ordered `Low < Medium < High`.
    PriorityLevel, field = "priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl PriorityLevel {
    /// One level up, capped at `High`.
    pub fn promote(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// One level down, floored at `Low`.
    pub fn demote(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        Self::Medium
    }
}
