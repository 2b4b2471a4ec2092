//! Onboarding step descriptors and progress math.

use serde::Serialize;

/// Icon reference for one onboarding screen. The host maps these to its own
/// icon assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepIcon {
    Trophy,
    Gamepad,
    Gift,
}

/// Static metadata for one onboarding screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDescriptor {
    pub title: String,
    pub description: String,
    pub icon: StepIcon,
    /// Ordered feature bullet points shown under the description.
    pub features: Vec<String>,
}

impl StepDescriptor {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: StepIcon,
        features: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The three reference onboarding screens for the bingo product.
pub fn welcome_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(
            "Welcome to Bingo Game!",
            "Experience the ultimate multiplayer bingo with voice announcements in multiple languages",
            StepIcon::Trophy,
            &[
                "Real-time multiplayer gameplay",
                "Voice announcements in Amharic, Tigrinya & English",
                "Telegram bot integration",
                "Secure wallet system",
            ],
        ),
        StepDescriptor::new(
            "How to Play",
            "Learn the basics of our bingo game",
            StepIcon::Gamepad,
            &[
                "Join or create game rooms",
                "Mark numbers as they are called",
                "Complete patterns to win",
                "Win prizes from the prize pool",
            ],
        ),
        StepDescriptor::new(
            "Winning Patterns",
            "Different ways to win in bingo",
            StepIcon::Gift,
            &[
                "Horizontal Line: Complete any row",
                "Vertical Line: Complete any column",
                "Diagonal Line: Complete diagonal",
                "Full House: Mark all numbers",
            ],
        ),
    ]
}

/// One marker per step; a marker is reached when its position is at or
/// before the current step index.
pub fn progress_markers(step_count: usize, current: usize) -> Vec<bool> {
    (0..step_count).map(|i| i <= current).collect()
}
