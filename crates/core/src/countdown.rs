//! Countdowns derived from engine hours, insurance expiry and the
//! maintenance schedule.
//!
//! All functions take `today` explicitly so callers decide the clock.

use chrono::NaiveDate;

use crate::dates::{days_between, parse_display_date};
use crate::duration::{format_duration, parse_duration};
use crate::models::{UavEngine, UavMaintenance};

// ---------------------------------------------------------------------------
// Severity bands
// ---------------------------------------------------------------------------

/// Five-band severity of a countdown banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    Expired,
    Critical,
    Warning,
    Attention,
    Good,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Attention => "attention",
            Self::Good => "good",
        }
    }

    /// CSS-style class of the banner (`status-<band>`).
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Expired => "status-expired",
            Self::Critical => "status-critical",
            Self::Warning => "status-warning",
            Self::Attention => "status-attention",
            Self::Good => "status-good",
        }
    }
}

/// Banding for day-based countdowns: <0 expired, <30 critical, <90 warning,
/// <180 attention.
pub fn day_band(days: i64) -> Band {
    match days {
        d if d < 0 => Band::Expired,
        d if d < 30 => Band::Critical,
        d if d < 90 => Band::Warning,
        d if d < 180 => Band::Attention,
        _ => Band::Good,
    }
}

// ---------------------------------------------------------------------------
// Russian day plurals
// ---------------------------------------------------------------------------

/// `день` / `дня` / `дней` agreeing with `n` (sign ignored).
pub fn day_word(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    if (11..=19).contains(&(n % 100)) {
        return "дней";
    }
    match n % 10 {
        1 => "день",
        2..=4 => "дня",
        _ => "дней",
    }
}

/// `"N <day word>"`.
pub fn days_phrase(n: i64) -> String {
    format!("{n} {}", day_word(n))
}

// ---------------------------------------------------------------------------
// Engine hours
// ---------------------------------------------------------------------------

/// Tooltip explaining the engine maintenance schedule.
pub const ENGINE_TO_HINT: &str = "Интервал до технического обслуживания двигателя рассчитывается по формуле: \n\
1-е ТО после 50 часов работы, \n\
2-е ТО после следующих 50 часов (в сумме 100 часов). \n\
Последующие ТО проводятся через каждые 100 часов работы двигателя.";

/// Fixed thresholds, in operated minutes, before the periodic schedule.
const FIXED_THRESHOLDS: [i64; 3] = [3000, 6000, 12_000];

/// Interval of the periodic schedule past the last fixed threshold.
const PERIODIC_THRESHOLD: i64 = 6000;

/// Threshold the engine is heading for after `operated` minutes.
///
/// A sum equal to a fixed threshold still belongs to that threshold
/// (remaining 0). Past 12000 the next multiple of 6000 strictly above the
/// sum is used.
pub fn next_engine_threshold(operated: i64) -> i64 {
    FIXED_THRESHOLDS
        .iter()
        .copied()
        .find(|threshold| operated <= *threshold)
        .unwrap_or_else(|| (operated.div_euclid(PERIODIC_THRESHOLD) + 1) * PERIODIC_THRESHOLD)
}

/// Engine banding in remaining minutes.
pub fn engine_band(remaining: i64) -> Band {
    match remaining {
        r if r < 0 => Band::Expired,
        r if r < 600 => Band::Critical,
        r if r < 1800 => Band::Warning,
        r if r < 2400 => Band::Attention,
        _ => Band::Good,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCountdown {
    pub operated: i64,
    pub threshold: i64,
    pub remaining: i64,
    /// `"H ч MM мин"`.
    pub formatted: String,
}

impl EngineCountdown {
    pub fn from_operated(operated: i64) -> Self {
        let threshold = next_engine_threshold(operated);
        let remaining = threshold - operated;
        Self {
            operated,
            threshold,
            remaining,
            formatted: format_duration(remaining),
        }
    }

    pub fn band(&self) -> Band {
        engine_band(self.remaining)
    }
}

/// Sum of all operating durations. Durations that do not parse (for
/// instance a freshly added `"0"`) count as zero.
pub fn total_operated_minutes(records: &[UavEngine]) -> i64 {
    records
        .iter()
        .filter_map(|record| parse_duration(&record.engine_operate_duration))
        .sum()
}

/// Countdown over the vehicle's full, unfiltered engine log.
pub fn engine_countdown(records: &[UavEngine]) -> EngineCountdown {
    EngineCountdown::from_operated(total_operated_minutes(records))
}

// ---------------------------------------------------------------------------
// Insurance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceCountdown {
    /// Negative once the insurance has expired.
    pub days_left: i64,
}

impl InsuranceCountdown {
    pub fn new(expiry: NaiveDate, today: NaiveDate) -> Self {
        Self {
            days_left: days_between(today, expiry),
        }
    }

    pub fn band(&self) -> Band {
        day_band(self.days_left)
    }

    pub fn text(&self) -> String {
        if self.days_left < 0 {
            format!("Просрочено на {}", days_phrase(-self.days_left))
        } else {
            format!("{} до истечения страховки", days_phrase(self.days_left))
        }
    }
}

// ---------------------------------------------------------------------------
// Nearest maintenance
// ---------------------------------------------------------------------------

/// Horizon of the maintenance progress bar, in days.
pub const INSPECTION_HORIZON_DAYS: i64 = 365;

/// Days until the nearest inspection dated strictly after `today`.
pub fn nearest_inspection_days(records: &[UavMaintenance], today: NaiveDate) -> Option<i64> {
    records
        .iter()
        .filter_map(|record| parse_display_date(&record.inspection_date))
        .filter(|date| *date > today)
        .map(|date| days_between(today, date))
        .min()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionCountdown {
    /// `None` when no inspection is scheduled after today.
    pub days: Option<i64>,
}

impl InspectionCountdown {
    pub fn new(records: &[UavMaintenance], today: NaiveDate) -> Self {
        Self {
            days: nearest_inspection_days(records, today),
        }
    }

    /// Without an upcoming inspection the banner is critical.
    pub fn band(&self) -> Band {
        match self.days {
            Some(days) => day_band(days),
            None => Band::Critical,
        }
    }

    /// Fill of the progress bar: 100 when due (or unknown), 0 a year out.
    pub fn progress_percent(&self) -> u8 {
        match self.days {
            None => 100,
            Some(days) if days <= 0 => 100,
            Some(days) if days >= INSPECTION_HORIZON_DAYS => 0,
            Some(days) => {
                let left = (INSPECTION_HORIZON_DAYS - days) as f64;
                (left / INSPECTION_HORIZON_DAYS as f64 * 100.0).round() as u8
            }
        }
    }

    pub fn text(&self) -> String {
        match self.days {
            Some(days) => format!("{} до ближайшего ТО", days_phrase(days)),
            None => "Нет запланированных ТО".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
