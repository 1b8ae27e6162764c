//! Maintenance statuses, failure severities and document types.
//!
//! Wire values are the upper-case Russian words the backend stores.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Cell tags
// ---------------------------------------------------------------------------

/// Colour tag of a status/severity cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Success,
    Info,
    Warn,
    Danger,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Danger => "danger",
        }
    }
}

// ---------------------------------------------------------------------------
// Maintenance (TO) status
// ---------------------------------------------------------------------------

/// Status of a scheduled maintenance/inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    #[default]
    #[serde(rename = "ЗАПЛАНИРОВАНО")]
    Planned,
    #[serde(rename = "ВЫПОЛНЕНО")]
    Done,
    #[serde(rename = "ЗАМЕЧАНИЯ")]
    Remarks,
    #[serde(rename = "ОШИБКИ")]
    Errors,
    #[serde(rename = "НЕИЗВЕСТНО", other)]
    Unknown,
}

impl MaintenanceStatus {
    /// Statuses offered when editing a row.
    pub const SELECTABLE: &'static [MaintenanceStatus] = &[
        MaintenanceStatus::Planned,
        MaintenanceStatus::Done,
        MaintenanceStatus::Remarks,
        MaintenanceStatus::Unknown,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "ЗАПЛАНИРОВАНО",
            Self::Done => "ВЫПОЛНЕНО",
            Self::Remarks => "ЗАМЕЧАНИЯ",
            Self::Errors => "ОШИБКИ",
            Self::Unknown => "НЕИЗВЕСТНО",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Запланировано",
            Self::Done => "Выполнено",
            Self::Remarks => "Замечания",
            Self::Errors => "Ошибки",
            Self::Unknown => "Неизвестно",
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Self::Done => Tag::Success,
            Self::Remarks => Tag::Warn,
            Self::Errors => Tag::Danger,
            Self::Planned | Self::Unknown => Tag::Info,
        }
    }

}

impl FromStr for MaintenanceStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ЗАПЛАНИРОВАНО" => Ok(Self::Planned),
            "ВЫПОЛНЕНО" => Ok(Self::Done),
            "ЗАМЕЧАНИЯ" => Ok(Self::Remarks),
            "ОШИБКИ" => Ok(Self::Errors),
            "НЕИЗВЕСТНО" => Ok(Self::Unknown),
            other => Err(CoreError::UnknownValue(format!(
                "maintenance status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure severity
// ---------------------------------------------------------------------------

/// Severity of a failure, also used as the importance of a failure step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailureSeverity {
    #[serde(rename = "ОШИБКА")]
    Error,
    #[serde(rename = "ПРЕДУПРЕЖДЕНИЕ")]
    Warning,
    #[serde(rename = "ЗАМЕЧАНИЕ")]
    Remark,
    #[default]
    #[serde(rename = "ИНФОРМАЦИЯ")]
    Information,
    /// Any value the backend sends that is not listed above.
    #[serde(rename = "НЕИЗВЕСТНО", other)]
    Unknown,
}

impl FailureSeverity {
    pub const ALL: &'static [FailureSeverity] = &[
        FailureSeverity::Error,
        FailureSeverity::Warning,
        FailureSeverity::Remark,
        FailureSeverity::Information,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ОШИБКА",
            Self::Warning => "ПРЕДУПРЕЖДЕНИЕ",
            Self::Remark => "ЗАМЕЧАНИЕ",
            Self::Information => "ИНФОРМАЦИЯ",
            Self::Unknown => "НЕИЗВЕСТНО",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Ошибка",
            Self::Warning => "Предупреждение",
            Self::Remark => "Замечание",
            Self::Information => "Информация",
            Self::Unknown => "Неизвестно",
        }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Self::Error => Tag::Danger,
            Self::Warning => Tag::Warn,
            Self::Information => Tag::Success,
            Self::Remark | Self::Unknown => Tag::Info,
        }
    }
}

impl FromStr for FailureSeverity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ОШИБКА" => Ok(Self::Error),
            "ПРЕДУПРЕЖДЕНИЕ" => Ok(Self::Warning),
            "ЗАМЕЧАНИЕ" => Ok(Self::Remark),
            "ИНФОРМАЦИЯ" => Ok(Self::Information),
            "НЕИЗВЕСТНО" => Ok(Self::Unknown),
            other => Err(CoreError::UnknownValue(format!("failure severity '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Attached document types
// ---------------------------------------------------------------------------

/// PDF document slots on a vehicle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    /// Airworthiness certificate.
    Slg,
    /// Evaluation act.
    EvalAct,
    Insurance,
}

impl DocType {
    pub const ALL: &'static [DocType] = &[DocType::Slg, DocType::EvalAct, DocType::Insurance];

    /// Path segment used by the document endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slg => "Slg",
            Self::EvalAct => "EvalAct",
            Self::Insurance => "Insurance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Slg => "Сертификат летной годности",
            Self::EvalAct => "Акт оценки",
            Self::Insurance => "Документ страхования",
        }
    }

}

impl FromStr for DocType {
    type Err = CoreError;

    /// Case-insensitive parse of the path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|doc| doc.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownValue(format!("document type '{s}'")))
    }
}
