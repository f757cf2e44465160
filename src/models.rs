use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub access_code: String,
    pub role: Role,
    pub enrolled_courses: Vec<String>,
    pub completed_courses: Vec<String>,
    // course id -> percent complete, 0..=100
    pub progress: HashMap<String, u8>,
    pub badges: Vec<String>,
    pub created_at: NaiveDate,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub modules: u32,
    pub enrolled_count: u32,
    pub completion_rate: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PendingReview {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub sprint_name: String,
    pub submitted_at: NaiveDate,
    pub status: ReviewStatus,
}

/// Closed set of renderable badge icons. Consumers match on the variant
/// instead of looking up arbitrary strings with a fallback default.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeIcon {
    Footprints,
    Clock,
    Trophy,
    GraduationCap,
    Compass,
    Flame,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: BadgeIcon,
    // catalog-level flag; per-user unlock state comes from User.badges
    pub unlocked: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub course_name: String,
    pub completed_at: NaiveDate,
    pub certificate_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StudyStat {
    pub day: String,
    pub hours: f32,
    pub quiz_score: u8,
}

// --- derived projection rows ---

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Primary,
    Accent,
    Muted,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CoursePopularity {
    pub course: String,
    pub enrolled_count: u32,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSlice {
    pub label: String,
    pub value: u8,
    pub color_token: ColorToken,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_students: u32,
    pub pending_reviews: u32,
    pub approved_sprints: u32,
    pub active_courses: u32,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course: Course,
    pub percent: u8,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BadgeBoard {
    pub unlocked: Vec<Badge>,
    pub locked: Vec<Badge>,
}

// --- wire types ---

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub role: Role,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogoutReq {
    pub session_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub course: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub name: String,
    pub email: String,
    pub access_code: String,
    pub initial_course: Option<String>,
}
