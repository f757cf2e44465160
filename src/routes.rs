use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    access,
    auth::{Session, SessionStore},
    dataset::AcademyData,
    models::*,
};

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<AcademyData>,
    pub sessions: SessionStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        // admin dashboard
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id/courses", get(user_courses))
        .route("/api/users/:id/badges", get(user_badges))
        .route("/api/reviews", get(list_reviews))
        .route("/api/kpis", get(kpis))
        .route("/api/metrics/popularity", get(popularity))
        .route("/api/metrics/completion", get(completion))
        // shared catalog + student dashboard
        .route("/api/courses", get(list_courses))
        .route("/api/badges", get(list_badges))
        .route("/api/certificates", get(list_certificates))
        .route("/api/study-stats", get(list_study_stats))
        .with_state(state)
}

// --- auth ---

async fn login(
    State(st): State<AppState>,
    Json(req): Json<LoginReq>,
) -> Result<Json<Session>, (StatusCode, String)> {
    let session = st
        .sessions
        .login(req.role, &req.username, &req.password)
        .await
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;
    tracing::info!(role = ?session.role, "login ok");
    Ok(Json(session))
}

async fn logout(
    State(st): State<AppState>,
    Json(req): Json<LogoutReq>,
) -> Json<serde_json::Value> {
    st.sessions.logout(req.session_id);
    Json(serde_json::json!({ "ok": true }))
}

// --- users ---

#[derive(Deserialize)]
struct UserQuery {
    search: Option<String>,
}

async fn list_users(State(st): State<AppState>, Query(q): Query<UserQuery>) -> Json<Vec<User>> {
    let term = q.search.unwrap_or_default();
    Json(st.data.filter_users(&term).into_iter().cloned().collect())
}

/// Issues an access code and acknowledges the form. The dataset itself is
/// fixed, so nothing is stored; the code only travels back to the caller.
async fn create_user(
    Json(req): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<CreatedUser>), (StatusCode, String)> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() {
        return Err(e400("name and email are required"));
    }
    let created = CreatedUser {
        name: format!("{} {}", req.name.trim(), req.last_name.trim())
            .trim()
            .to_string(),
        email: req.email.trim().to_string(),
        access_code: access::generate_access_code(),
        initial_course: req.course,
    };
    tracing::info!(email = %created.email, code = %created.access_code, "user acknowledged");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn user_courses(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CourseProgress>>, (StatusCode, String)> {
    let user = st.data.user(&id).ok_or_else(|| e404("user not found"))?;
    Ok(Json(st.data.courses_for(user)))
}

async fn user_badges(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BadgeBoard>, (StatusCode, String)> {
    let user = st.data.user(&id).ok_or_else(|| e404("user not found"))?;
    Ok(Json(st.data.badge_board(user)))
}

// --- fixed collections ---

async fn list_courses(State(st): State<AppState>) -> Json<Vec<Course>> {
    Json(st.data.courses().to_vec())
}

async fn list_reviews(State(st): State<AppState>) -> Json<Vec<PendingReview>> {
    Json(st.data.pending_reviews().to_vec())
}

async fn list_badges(State(st): State<AppState>) -> Json<Vec<Badge>> {
    Json(st.data.badges().to_vec())
}

async fn list_certificates(State(st): State<AppState>) -> Json<Vec<Certificate>> {
    Json(st.data.certificates().to_vec())
}

async fn list_study_stats(State(st): State<AppState>) -> Json<Vec<StudyStat>> {
    Json(st.data.study_stats().to_vec())
}

// --- aggregates ---

async fn kpis(State(st): State<AppState>) -> Json<DashboardKpis> {
    Json(st.data.kpis())
}

async fn popularity(State(st): State<AppState>) -> Json<Vec<CoursePopularity>> {
    Json(st.data.course_popularity())
}

async fn completion(State(st): State<AppState>) -> Json<Vec<CompletionSlice>> {
    Json(st.data.completion_breakdown())
}

// --- helpers ---

fn e400<T: Into<String>>(msg: T) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

fn e404<T: Into<String>>(msg: T) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, msg.into())
}
