//! Data layer: table model, loading, and derived columns.
//!
//! Architecture:
//! ```text
//!  SmartScan Score Summary.csv  (';' separated, decimal comma)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset   │  named columns of CellValue
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ derived   │  error-bar radii, axis bounds
//!   └──────────┘
//! ```

pub mod derived;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::loader::read_table;
    use super::model::Dataset;
    use crate::config::TableFormat;

    /// Group of each candidate, 1..=12.
    pub const GROUPS: [i64; 12] = [1, 1, 1, 2, 2, 2, 1, 1, 2, 2, 1, 2];

    /// A complete twelve-candidate summary in the on-disk format.
    pub fn study_csv() -> String {
        [
            "Candidate;Group;Usability;SUS;Learnability;SS_Time;US_Time;SS_Score;US_Score;SS_Avg;US_Avg;SS_Avg_HD;SS_Avg_OC;US_Avg_HD;US_Avg_OC",
            "1;1;75;72,5;80;210;185;4;3;3,5;3,25;4,0;3,0;3,5;3,0",
            "2;1;70;67,5;62,5;254;198;5;4;4,25;3,75;4,5;4,0;4,0;3,5",
            "3;1;82,5;80;87,5;176;230;4;4;4,0;3,5;4,25;3,75;3,75;3,25",
            "4;2;65;62,5;75;301;347;3;3;3,0;2,75;3,5;2,5;3,0;2,5",
            "5;2;90;87,5;93,75;145;162;5;5;4,75;4,5;5,0;4,5;4,75;4,25",
            "6;2;55;57,5;50;288;276;3;2;2,75;2,5;3,0;2,5;2,75;2,25",
            "7;1;77,5;75;81,25;199;221;4;4;4,0;3,75;4,25;3,75;4,0;3,5",
            "8;1;85;82,5;87,5;167;203;5;4;4,5;4,0;4,75;4,25;4,25;3,75",
            "9;2;60;62,5;56,25;243;262;3;3;3,25;3,0;3,5;3,0;3,25;2,75",
            "10;2;72,5;70;75;231;219;4;3;3,75;3,25;4,0;3,5;3,5;3,0",
            "11;1;80;77,5;81,25;188;240;4;4;4,25;3,5;4,5;4,0;3,75;3,25",
            "12;2;67,5;65;68,75;262;255;4;3;3,5;3,25;3,75;3,25;3,5;3,0",
        ]
        .join("\n")
            + "\n"
    }

    pub fn study_dataset() -> Dataset {
        dataset_with(|csv| csv)
    }

    /// The study table after an edit to its text.
    pub fn dataset_with(edit: impl FnOnce(String) -> String) -> Dataset {
        read_table(edit(study_csv()).as_bytes(), &TableFormat::default()).unwrap()
    }
}
