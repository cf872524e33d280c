//! A trainee's own scores, scheduled tests and assignments

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Record};

/// Score of one completed test
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub test_name: String,
    pub score: u8,
    pub max_score: u8,
    pub date: String,
    pub rank: u32,
    pub total_participants: u32,
}

impl TestResult {
    pub fn rank_label(&self) -> String {
        format!("Rank #{} of {}", self.rank, self.total_participants)
    }
}

impl Record for TestResult {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "testName" => self.test_name.as_str().into(),
            "score" => self.score.into(),
            "maxScore" => self.max_score.into(),
            "date" => self.date.as_str().into(),
            "rank" => self.rank.into(),
            "totalParticipants" => self.total_participants.into(),
            _ => CellValue::Missing,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpcomingTest {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub format: String,
}

impl Record for UpcomingTest {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "date" => self.date.as_str().into(),
            "time" => self.time.as_str().into(),
            "duration" => self.duration.as_str().into(),
            "type" => self.format.as_str().into(),
            _ => CellValue::Missing,
        }
    }
}

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LearningTask {
    pub id: String,
    pub title: String,
    pub due_date: String,
    pub priority: TaskPriority,
    pub completed: bool,
}

impl Record for LearningTask {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "dueDate" => self.due_date.as_str().into(),
            "priority" => <&'static str>::from(self.priority).into(),
            "completed" => self.completed.into(),
            _ => CellValue::Missing,
        }
    }
}

/// Number of tasks still to do
pub fn pending_count(tasks: &[LearningTask]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}
