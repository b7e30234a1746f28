use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum_extra::extract::WithRejection;
use shared_types::CourseInstanceId;

use super::dto::{
    AddTeacherRequestRestDTO, GetCourseInstanceListResponseRestDTO,
    GetCourseInstancesQueryParams, PersonResponseRestDTO,
};
use super::mapper::{course_teachers_location, language_hint};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(OkOrErrorResponse<GetCourseInstanceListResponseRestDTO>),
    params(
        GetCourseInstancesQueryParams,
        ("Accept-Language" = Option<String>, Header, description = "Language hint, English titles are returned when it contains the configured marker"),
    ),
    tag = "course_management",
    summary = "List course instances",
    description = indoc::formatdoc! {"
        Returns a page of course instances for a semester, with localized titles and
        the name of each course's main teacher.
    "},
)]
pub(crate) async fn get_course_instances(
    state: State<AppState>,
    headers: HeaderMap,
    WithRejection(Query(query), _): WithRejection<
        Query<GetCourseInstancesQueryParams>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<GetCourseInstanceListResponseRestDTO> {
    let result = state
        .core
        .course_service
        .get_course_instances_by_semester(
            language_hint(&headers),
            query.semester.clone(),
            query.page_number(),
        )
        .await;
    OkOrErrorResponse::from_result(result, state, "listing course instances")
}

#[utoipa::path(
    post,
    path = "/api/courses/{id}/teachers",
    request_body(
        content = AddTeacherRequestRestDTO,
        example = json!({ "ssn": "1203735289", "type": "MainTeacher" }),
    ),
    responses(CreatedOrErrorResponse<PersonResponseRestDTO>),
    params(
        ("id" = CourseInstanceId, Path, description = "Course instance id")
    ),
    tag = "course_management",
    summary = "Register teacher",
    description = indoc::formatdoc! {"
        Registers a person as main or assistant teacher of a course instance. A course
        instance has at most one main teacher and a person is registered at most once
        per course instance.
    "},
)]
pub(crate) async fn post_course_teacher(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<CourseInstanceId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<AddTeacherRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<PersonResponseRestDTO> {
    let result = state
        .core
        .course_service
        .add_teacher_to_course(id, request.into())
        .await;
    CreatedOrErrorResponse::from_result(
        result,
        course_teachers_location(id),
        state,
        "adding teacher to course",
    )
}
