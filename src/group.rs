use std::collections::BTreeMap;
use std::fmt;

use crate::color::{self, Rgb};
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// Group – counterbalancing order of a candidate
// ---------------------------------------------------------------------------

/// Which modality a candidate performed first, or the control bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Control,
    SmartScanFirst,
    UltrasoundFirst,
}

impl Group {
    /// Legend order used by the time/score scatter views.
    pub const PARITY_ORDER: [Group; 3] =
        [Group::UltrasoundFirst, Group::SmartScanFirst, Group::Control];

    pub fn label(self) -> &'static str {
        match self {
            Group::Control => "Control",
            Group::SmartScanFirst => "SmartScan First",
            Group::UltrasoundFirst => "Ultrasound First",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Group::Control => color::GRAY,
            Group::SmartScanFirst => color::ORANGE,
            Group::UltrasoundFirst => color::BLUE,
        }
    }
}

impl TryFrom<i64> for Group {
    type Error = ReportError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Group::Control),
            1 => Ok(Group::SmartScanFirst),
            2 => Ok(Group::UltrasoundFirst),
            other => Err(ReportError::UnknownGroup(other)),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row indices per group. Every row lands in exactly one bucket.
pub fn partition(groups: &[Group]) -> BTreeMap<Group, Vec<usize>> {
    let mut buckets: BTreeMap<Group, Vec<usize>> = BTreeMap::new();
    for (row, group) in groups.iter().enumerate() {
        buckets.entry(*group).or_default().push(row);
    }
    buckets
}

// ---------------------------------------------------------------------------
// Modality – the two compared task techniques
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    SmartScan,
    Ultrasound,
}

impl Modality {
    pub fn name(self) -> &'static str {
        match self {
            Modality::SmartScan => "SmartScan",
            Modality::Ultrasound => "Ultrasound",
        }
    }

    /// Column prefix in the summary table.
    pub fn prefix(self) -> &'static str {
        match self {
            Modality::SmartScan => "SS",
            Modality::Ultrasound => "US",
        }
    }

    /// Full column name for a measurement, e.g. `SS_Avg_HD`.
    pub fn column(self, measurement: &str) -> String {
        format!("{}_{measurement}", self.prefix())
    }

    /// Name of the derived error-bar radius column.
    pub fn error_column(self) -> &'static str {
        match self {
            Modality::SmartScan => "ss_err",
            Modality::Ultrasound => "us_err",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Modality::SmartScan => color::ORANGE,
            Modality::Ultrasound => color::BLUE,
        }
    }
}
