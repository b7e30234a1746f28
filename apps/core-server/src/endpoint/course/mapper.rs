use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use shared_types::CourseInstanceId;

/// Raw `Accept-Language` value, empty when the header is missing or not valid ASCII.
pub(super) fn language_hint(headers: &HeaderMap) -> &str {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub(super) fn course_teachers_location(id: CourseInstanceId) -> String {
    format!("/api/courses/{id}/teachers")
}
