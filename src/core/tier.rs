use crate::models::{Tier, TierName};

/// Inclusive lower bound for Gold
pub const GOLD_THRESHOLD: f64 = 8.5;
/// Inclusive lower bound for Silver
pub const SILVER_THRESHOLD: f64 = 7.0;

pub const GOLD: Tier = Tier {
    name: TierName::Gold,
    color: "#FFD700",
    description: "Exceptional compatibility",
};

pub const SILVER: Tier = Tier {
    name: TierName::Silver,
    color: "#C0C0C0",
    description: "Strong compatibility",
};

pub const BRONZE: Tier = Tier {
    name: TierName::Bronze,
    color: "#CD7F32",
    description: "Good compatibility",
};

/// Map a 0-10 compatibility score to its tier
///
/// Thresholds are real-valued so fractional scores classify the same way;
/// for integer scores Gold effectively starts at 9.
#[inline]
pub fn classify(score: f64) -> Tier {
    if score >= GOLD_THRESHOLD {
        GOLD
    } else if score >= SILVER_THRESHOLD {
        SILVER
    } else {
        BRONZE
    }
}

#[inline]
pub fn classify_normalized(normalized: u8) -> Tier {
    classify(f64::from(normalized))
}

impl Tier {
    pub fn for_name(name: TierName) -> Tier {
        match name {
            TierName::Gold => GOLD,
            TierName::Silver => SILVER,
            TierName::Bronze => BRONZE,
        }
    }
}
