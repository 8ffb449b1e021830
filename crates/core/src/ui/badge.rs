//! Status badge colour mapping
//!
//! Case-insensitive lookup from a free-form status string to a badge style.
//! Anything unrecognised gets the neutral slate style.

/// Badge colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl BadgeStyle {
    const fn new(background: &'static str, text: &'static str, border: &'static str) -> Self {
        Self { background, text, border }
    }

    pub fn class(&self) -> String {
        format!("{} {} border {}", self.background, self.text, self.border)
    }
}

pub const NEUTRAL_BADGE: BadgeStyle =
    BadgeStyle::new("bg-slate-100", "text-slate-700", "border-slate-300");

/// Style for `status`, ignoring case and surrounding whitespace.
pub fn status_badge_style(status: &str) -> BadgeStyle {
    match status.trim().to_lowercase().as_str() {
        "active" | "approved" => {
            BadgeStyle::new("bg-green-100", "text-green-700", "border-green-300")
        }
        "on leave" | "in-progress" => {
            BadgeStyle::new("bg-amber-100", "text-amber-700", "border-amber-300")
        }
        "inactive" | "rejected" => BadgeStyle::new("bg-red-100", "text-red-700", "border-red-300"),
        "maternity leave" | "submitted" => {
            BadgeStyle::new("bg-sky-100", "text-sky-700", "border-sky-300")
        }
        "remote" => BadgeStyle::new("bg-indigo-100", "text-indigo-700", "border-indigo-300"),
        "in review" => BadgeStyle::new("bg-violet-100", "text-violet-700", "border-violet-300"),
        "draft" => BadgeStyle::new("bg-gray-100", "text-gray-700", "border-gray-300"),
        _ => NEUTRAL_BADGE,
    }
}

/// Rendered badge; the label is shown exactly as supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge<'a> {
    pub label: &'a str,
    pub style: BadgeStyle,
}

impl<'a> StatusBadge<'a> {
    pub fn new(status: &'a str) -> Self {
        Self { label: status, style: status_badge_style(status) }
    }
}
