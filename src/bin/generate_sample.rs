use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

const DEFAULT_OUTPUT: &str = "data/SmartScan Score Summary.csv";

/// Counterbalancing group of candidates 1..=12.
const GROUPS: [u8; 12] = [1, 1, 1, 2, 2, 2, 1, 1, 2, 2, 1, 2];

/// A number written with a decimal comma, as the study spreadsheet does.
struct Decimal(f64);

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string().replace('.', ","))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    candidate: u32,
    group: u8,
    usability: Decimal,
    #[serde(rename = "SUS")]
    sus: Decimal,
    learnability: Decimal,
    #[serde(rename = "SS_Time")]
    ss_time: u32,
    #[serde(rename = "US_Time")]
    us_time: u32,
    #[serde(rename = "SS_Score")]
    ss_score: u32,
    #[serde(rename = "US_Score")]
    us_score: u32,
    #[serde(rename = "SS_Avg")]
    ss_avg: Decimal,
    #[serde(rename = "US_Avg")]
    us_avg: Decimal,
    #[serde(rename = "SS_Avg_HD")]
    ss_avg_hd: Decimal,
    #[serde(rename = "SS_Avg_OC")]
    ss_avg_oc: Decimal,
    #[serde(rename = "US_Avg_HD")]
    us_avg_hd: Decimal,
    #[serde(rename = "US_Avg_OC")]
    us_avg_oc: Decimal,
}

/// HD/OC pair on the 0..6 scale in quarter steps, plus their mean.
fn split(seed: u32, spread: u32) -> (f64, f64, f64) {
    let hd = 2.5 + 0.25 * f64::from(seed % 12);
    let oc = (hd - 0.25 * f64::from(spread % 4 + 1)).max(0.0);
    (hd, oc, (hd + oc) / 2.0)
}

fn row(candidate: u32, group: u8) -> SummaryRow {
    let sus = 50.0 + 2.5 * f64::from(candidate * 5 % 17);
    let usability = (sus + 2.5 * (f64::from(candidate % 3) - 1.0)).clamp(0.0, 100.0);
    let learnability = (sus + 6.25 * (f64::from(candidate % 4) - 1.5)).clamp(0.0, 100.0);

    let (ss_hd, ss_oc, ss_avg) = split(candidate * 7, candidate);
    let (us_hd, us_oc, us_avg) = split(candidate * 5 + 3, candidate + 2);

    SummaryRow {
        candidate,
        group,
        usability: Decimal(usability),
        sus: Decimal(sus),
        learnability: Decimal(learnability),
        ss_time: 140 + candidate * 37 % 170,
        us_time: 150 + candidate * 53 % 200,
        ss_score: ss_avg.round() as u32,
        us_score: us_avg.round() as u32,
        ss_avg: Decimal(ss_avg),
        us_avg: Decimal(us_avg),
        ss_avg_hd: Decimal(ss_hd),
        ss_avg_oc: Decimal(ss_oc),
        us_avg_hd: Decimal(us_hd),
        us_avg_oc: Decimal(us_oc),
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    for (candidate, &group) in (1u32..).zip(GROUPS.iter()) {
        writer
            .serialize(row(candidate, group))
            .with_context(|| format!("writing candidate {candidate}"))?;
    }
    writer.flush().context("flushing sample table")?;

    println!(
        "Wrote {} candidates to {}",
        GROUPS.len(),
        output_path.display()
    );
    Ok(())
}
