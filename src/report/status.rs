//! Status and priority coloring rules.

use crate::model::Rgb;
use std::fmt;
use std::str::FromStr;

/// Accent colors used for status markers.
pub mod palette {
    use crate::model::Rgb;

    /// Title text, completed items, 100% progress
    pub const GREEN: Rgb = Rgb::new(16, 185, 129);
    /// CRITICAL priority, stalled progress
    pub const RED: Rgb = Rgb::new(220, 38, 38);
    /// HIGH priority, partial progress
    pub const AMBER: Rgb = Rgb::new(245, 158, 11);
    /// MEDIUM priority
    pub const BLUE: Rgb = Rgb::new(59, 130, 246);
    /// LOW priority
    pub const GRAY: Rgb = Rgb::new(107, 114, 128);
    /// Header text on dark table headers
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Marker for finished or partially finished features.
pub const CHECK_MARK: char = '✓';

/// Priority of a planned feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Blocks the core value of the app
    Critical,
    /// Needed for the next milestone
    High,
    /// Engagement features
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Upper-case label as it appears in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Accent color for the label.
    pub fn color(&self) -> Rgb {
        match self {
            Priority::Critical => palette::RED,
            Priority::High => palette::AMBER,
            Priority::Medium => palette::BLUE,
            Priority::Low => palette::GRAY,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Color for an implementation status such as "✓ Complete".
pub fn implementation_color(status: &str) -> Option<Rgb> {
    status.contains(CHECK_MARK).then_some(palette::GREEN)
}

/// Color for a priority label. Unknown labels stay uncolored.
pub fn priority_color(priority: &str) -> Option<Rgb> {
    priority.parse::<Priority>().ok().map(|p| p.color())
}

/// Color for a completion status.
///
/// "100%" is green. Anything mentioning "0%" or CRITICAL is red, which
/// includes 10%, 80% and 90%. The rest is amber.
pub fn completion_color(status: &str) -> Rgb {
    if status.contains("100%") {
        palette::GREEN
    } else if status.contains("CRITICAL") || status.contains("0%") {
        palette::RED
    } else {
        palette::AMBER
    }
}

/// [`completion_color`] in the shape table rules expect.
pub fn completion_rule(status: &str) -> Option<Rgb> {
    Some(completion_color(status))
}
