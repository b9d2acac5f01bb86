use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference to one uploaded drawing. The image bytes themselves are never
/// consumed by the report pipeline, so only identifying metadata is kept.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UploadedFile {
    #[schema(example = "f1e2d3c4-b5a6-7890-1234-567890abcdef")]
    pub id: Uuid,
    #[schema(example = "house.png")]
    pub filename: String,
    #[schema(example = 48213)]
    pub size: usize,
}

/// Submitted questionnaire. Child identity fields are optional; every other
/// key is a question id (`q1_1` .. `q5_5`) mapped to a frequency label.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct Survey {
    #[serde(rename = "childName", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Алиса")]
    pub child_name: Option<String>,
    #[serde(rename = "childDOB", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "14.03.2019")]
    pub child_dob: Option<String>,
    #[serde(rename = "childGender", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "male")]
    pub child_gender: Option<String>,
    #[serde(flatten)]
    pub answers: HashMap<String, String>,
}

/// One assessment session: created on upload, enriched by survey submission.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub files: Vec<UploadedFile>,
    pub survey: Option<Survey>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = "f1e2d3c4-b5a6-7890-1234-567890abcdef")]
    pub task_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitSurveyRequest {
    pub task_id: Uuid,
    pub survey: Survey,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitSurveyResponse {
    #[schema(example = "Опросник принят")]
    pub message: String,
    pub task_id: Uuid,
}
