//! Figures for the executive overview

use serde::{Deserialize, Serialize};

use crate::{
    roster::Trainee,
    table::{CellValue, Record},
};

/// Programme wide figures that are not derived from the roster
pub const COMPLETION_RATE_PERCENT: u8 = 84;
pub const SUCCESSFUL_HIRES: u32 = 28;
pub const TRAINING_ROI: f64 = 2.7;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Department {
    pub name: String,
    pub trainees: u32,
    /// Percentage 0..=100
    pub performance: u8,
    pub budget: u32,
}

impl Record for Department {
    fn row_key(&self) -> String {
        self.name.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "trainees" => self.trainees.into(),
            "performance" => self.performance.into(),
            "budget" => self.budget.into(),
            _ => CellValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSummary {
    pub total_trainees: usize,
    pub completion_rate: u8,
    pub successful_hires: u32,
    pub training_roi: f64,
}

impl ExecutiveSummary {
    pub fn for_roster(trainees: &[Trainee]) -> Self {
        Self {
            total_trainees: trainees.len(),
            completion_rate: COMPLETION_RATE_PERCENT,
            successful_hires: SUCCESSFUL_HIRES,
            training_roi: TRAINING_ROI,
        }
    }

    /// Label and value of each figure in display order
    pub fn figures(&self) -> [(&'static str, String); 4] {
        [
            ("Total Trainees", self.total_trainees.to_string()),
            ("Completion Rate", format!("{}%", self.completion_rate)),
            ("Successful Hires", self.successful_hires.to_string()),
            ("Training ROI", format!("{}x", self.training_roi)),
        ]
    }
}
