//! Status badges shown next to attendance, payment and exam rows.
//!
//! Each status is a closed enum and maps to its style through a lookup,
//! so an unexpected status string can only ever land on an explicit
//! fallback variant.

use serde::{Deserialize, Serialize};

/// Base look of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// Accent color layered on top of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub variant: BadgeVariant,
    pub tone: Option<Tone>,
}

impl BadgeStyle {
    const fn new(label: &'static str, variant: BadgeVariant, tone: Option<Tone>) -> Self {
        Self {
            label,
            variant,
            tone,
        }
    }
}

pub trait Badge {
    fn badge(&self) -> BadgeStyle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
    #[default]
    NotMarked,
}

impl Badge for AttendanceStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            AttendanceStatus::Present => {
                BadgeStyle::new("Present", BadgeVariant::Default, Some(Tone::Success))
            }
            AttendanceStatus::Absent => BadgeStyle::new("Absent", BadgeVariant::Destructive, None),
            AttendanceStatus::Late => {
                BadgeStyle::new("Late", BadgeVariant::Default, Some(Tone::Warning))
            }
            AttendanceStatus::Excused => BadgeStyle::new("Excused", BadgeVariant::Outline, None),
            AttendanceStatus::NotMarked => {
                BadgeStyle::new("Not marked", BadgeVariant::Secondary, None)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Lenient parse used for free-form status strings; anything unrecognised
    /// becomes `Unknown`.
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "completed" => PaymentStatus::Completed,
            "pending" => PaymentStatus::Pending,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown,
        }
    }
}

impl Badge for PaymentStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            PaymentStatus::Completed => {
                BadgeStyle::new("Completed", BadgeVariant::Default, Some(Tone::Success))
            }
            PaymentStatus::Pending => {
                BadgeStyle::new("Pending", BadgeVariant::Outline, Some(Tone::Warning))
            }
            PaymentStatus::Failed => BadgeStyle::new("Failed", BadgeVariant::Destructive, None),
            PaymentStatus::Unknown => BadgeStyle::new("Unknown", BadgeVariant::Outline, None),
        }
    }
}

/// How full an exam is. Display only: enrollment past capacity is not blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExamAvailability {
    Available,
    FillingUp,
    AlmostFull,
}

impl ExamAvailability {
    /// 90% or more enrolled is almost full, 60% or more is filling up.
    /// A zero capacity counts as almost full.
    pub fn from_enrollment(enrolled: u32, capacity: u32) -> Self {
        if capacity == 0 {
            return ExamAvailability::AlmostFull;
        }

        let percent_full = u64::from(enrolled) * 100 / u64::from(capacity);
        match percent_full {
            90.. => ExamAvailability::AlmostFull,
            60..=89 => ExamAvailability::FillingUp,
            _ => ExamAvailability::Available,
        }
    }
}

impl Badge for ExamAvailability {
    fn badge(&self) -> BadgeStyle {
        match self {
            ExamAvailability::Available => {
                BadgeStyle::new("Available", BadgeVariant::Default, Some(Tone::Success))
            }
            ExamAvailability::FillingUp => {
                BadgeStyle::new("Filling Up", BadgeVariant::Default, Some(Tone::Warning))
            }
            ExamAvailability::AlmostFull => {
                BadgeStyle::new("Almost Full", BadgeVariant::Destructive, None)
            }
        }
    }
}

/// Whether an exam still takes enrollments, judged against its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrollmentWindow {
    Open,
    Closed,
}

impl EnrollmentWindow {
    pub fn at(deadline: chrono::NaiveDate, today: chrono::NaiveDate) -> Self {
        if today > deadline {
            EnrollmentWindow::Closed
        } else {
            EnrollmentWindow::Open
        }
    }
}

impl Badge for EnrollmentWindow {
    fn badge(&self) -> BadgeStyle {
        match self {
            EnrollmentWindow::Open => BadgeStyle::new("Open", BadgeVariant::Secondary, None),
            EnrollmentWindow::Closed => {
                BadgeStyle::new("Closed", BadgeVariant::Outline, Some(Tone::Danger))
            }
        }
    }
}
