use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Record};

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Inactive,
}

/// One trainee enrolled in a programme
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trainee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub current_week: u8,
    pub total_weeks: u8,
    /// Percentage 0..=100
    pub progress: u8,
    pub course: String,
    pub track: String,
    pub last_activity: String,
    pub avg_score: u8,
    pub status: ActivityStatus,
}

impl Record for Trainee {
    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "avatar" => self.avatar.as_str().into(),
            "currentWeek" => self.current_week.into(),
            "totalWeeks" => self.total_weeks.into(),
            "progress" => self.progress.into(),
            "course" => self.course.as_str().into(),
            "track" => self.track.as_str().into(),
            "lastActivity" => self.last_activity.as_str().into(),
            "avgScore" => self.avg_score.into(),
            "status" => <&'static str>::from(self.status).into(),
            _ => CellValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn trainee() -> Trainee {
        Trainee {
            id: "t9".to_string(),
            name: "Sneha Iyer".to_string(),
            email: "sneha.i@trainee.com".to_string(),
            avatar: String::new(),
            current_week: 7,
            total_weeks: 12,
            progress: 58,
            course: "AI-ML".to_string(),
            track: "Machine Learning".to_string(),
            last_activity: "2 days ago".to_string(),
            avg_score: 89,
            status: ActivityStatus::Inactive,
        }
    }

    #[rstest]
    #[case("name", CellValue::from("Sneha Iyer"))]
    #[case("avgScore", CellValue::Number(89.0))]
    #[case("status", CellValue::from("inactive"))]
    #[case("unknown", CellValue::Missing)]
    fn fields(#[case] key: &str, #[case] expected: CellValue) {
        assert_eq!(trainee().field(key), expected);
    }

    #[test]
    fn status_and_row_key() {
        let trainee = trainee();
        assert_eq!(trainee.status, ActivityStatus::Inactive);
        assert_eq!(trainee.row_key(), "t9");
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"id":"t1","name":"Priya Sharma","email":"priya.s@trainee.com",
            "avatar":"","currentWeek":2,"totalWeeks":12,"progress":18,"course":"Full Stack",
            "track":"React Development","lastActivity":"2 hours ago","avgScore":87,"status":"active"}"#;
        let trainee: Trainee = serde_json::from_str(json).unwrap();
        assert_eq!(trainee.avg_score, 87);
        assert_eq!(trainee.status, ActivityStatus::Active);
    }
}
