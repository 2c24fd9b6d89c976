//! Slot entity - a dated, timed, capacity-bounded shift within a ministry

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// How a slot gets filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotMode {
    /// Filled only via invitation and acceptance
    #[default]
    Manual,
    /// Open self-enrollment, subject to capacity and conflict checks.
    /// The legacy wire spelling "livre" is accepted on input.
    #[serde(alias = "livre")]
    Free,
}

impl SlotMode {
    /// String form as stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Free => "free",
        }
    }
}

impl std::str::FromStr for SlotMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Self::Manual),
            "free" | "livre" => Ok(Self::Free),
            other => Err(format!("unknown slot mode: {other}")),
        }
    }
}

/// Slot entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: Snowflake,
    pub ministry_id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    /// The calendar day that matters for conflict detection. Distinct from
    /// the start/end times, which only describe the shift within that day.
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub mode: SlotMode,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    /// Create a new Slot
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        ministry_id: Snowflake,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        mode: SlotMode,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            ministry_id,
            title: title.into(),
            description: None,
            date,
            start_time,
            end_time,
            mode,
            capacity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if members may enroll themselves directly
    #[inline]
    pub fn is_free_mode(&self) -> bool {
        self.mode == SlotMode::Free
    }

    /// Whether another confirmed assignment still fits
    #[inline]
    pub fn has_room_for(&self, confirmed_count: i64) -> bool {
        confirmed_count < i64::from(self.capacity)
    }

    /// Shift time range, "HH:MM to HH:MM"
    pub fn time_range(&self) -> String {
        format!(
            "{} to {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
