use serde::{Serialize, Serializer};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
/// Slider position before the user moves it.
pub const DEFAULT_RATING: u8 = 3;

/// Display bucket for a 1–5 rating. Annotates the results table only; never sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCategory {
    NeedsImprovement,
    Intermediate,
    Advanced,
}

impl RatingCategory {
    /// ≤2 needs improvement, 3 is intermediate, >3 is advanced.
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            r if r <= 2 => RatingCategory::NeedsImprovement,
            3 => RatingCategory::Intermediate,
            _ => RatingCategory::Advanced,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingCategory::NeedsImprovement => "Needs Improvement",
            RatingCategory::Intermediate => "Intermediate",
            RatingCategory::Advanced => "Advanced",
        }
    }
}

impl Serialize for RatingCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
