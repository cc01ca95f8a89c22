//! Results-screen report: counts, accuracy and achievement badges.

use serde::Serialize;

use crate::domain::results::GameResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PERFECT_SCORE: Badge = Badge {
    emoji: "🏆",
    title: "Perfect Score!",
    description: "You got every word right!",
};
pub const STAR_STUDENT: Badge = Badge {
    emoji: "⭐",
    title: "Star Student!",
    description: "Excellent spelling skills!",
};
pub const GREAT_JOB: Badge = Badge {
    emoji: "👍",
    title: "Great Job!",
    description: "You're doing really well!",
};
pub const BRAIN_POWER: Badge = Badge {
    emoji: "🧠",
    title: "Brain Power!",
    description: "No hints needed!",
};
pub const KEEP_TRYING: Badge = Badge {
    emoji: "💪",
    title: "Keep Trying!",
    description: "Practice makes perfect!",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    /// Rounded percentage, 0..=100.
    pub accuracy: u32,
    pub badges: Vec<Badge>,
}

/// Percentage of correct answers, rounded half up.
pub fn accuracy_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (2 * total)) as u32
}

/// Badges earned for an accuracy and hint record. Hints never cost points;
/// going without them only earns Brain Power.
pub fn badges_for(accuracy: u32, no_hints_used: bool) -> Vec<Badge> {
    let mut badges = Vec::new();
    if accuracy == 100 {
        badges.push(PERFECT_SCORE);
    }
    if accuracy >= 80 {
        badges.push(STAR_STUDENT);
    }
    if accuracy >= 60 {
        badges.push(GREAT_JOB);
    }
    if no_hints_used {
        badges.push(BRAIN_POWER);
    }
    if badges.is_empty() {
        badges.push(KEEP_TRYING);
    }
    badges
}

pub fn report(results: &[GameResult]) -> Report {
    let total = results.len();
    let correct = results.iter().filter(|r| r.correct).count();
    let accuracy = accuracy_percent(correct, total);
    let no_hints_used = results.iter().all(|r| !r.hints_used);
    Report {
        correct,
        incorrect: total - correct,
        total,
        accuracy,
        badges: badges_for(accuracy, no_hints_used),
    }
}
