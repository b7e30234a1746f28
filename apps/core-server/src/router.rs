#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use courses_core::CoursesCore;
use courses_core::config::ConfigError;
use courses_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{course, misc};
use crate::middleware::get_http_request_context;
use crate::seed::load_seed_file;
use crate::{ServerConfig, ServerError, dto};

pub(crate) struct InternalAppState {
    pub core: CoursesCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

/// Builds the core on top of `db_conn`, loads the configured seed file and serves
/// requests on `listener` until the server stops.
pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DbConn,
) -> Result<(), ServerError> {
    listener.set_nonblocking(true)?;

    let core = CoursesCore::new(Arc::new(DataLayer::build(db_conn)), config.core)
        .map_err(ConfigError::from)?;

    if let Some(seed_file) = &config.app.seed_file {
        let result = load_seed_file(&core, seed_file).await?;
        info!(
            "Seed data loaded: {} persons, {} course templates, {} course instances, {} teacher registrations",
            result.persons,
            result.course_templates,
            result.course_instances,
            result.teacher_registrations
        );
    }

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr()?;
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)?,
        router.into_make_service(),
    )
    .await?;

    Ok(())
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let api = Router::new()
        .route("/api/courses", get(course::controller::get_course_instances))
        .route(
            "/api/courses/{id}/teachers",
            post(course::controller::post_course_teacher),
        );

    let technical_endpoints = if config.enable_server_info {
        Router::new()
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check))
    } else {
        Router::new()
    };

    let openapi_endpoints = if config.enable_open_api {
        Router::new().merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
    } else {
        Router::new()
    };

    Router::new()
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "courses",
                        RequestId = context.request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(openapi_endpoints)
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        course::controller::get_course_instances,
        course::controller::post_course_teacher,

        misc::get_build_info,
        misc::health_check,
    ),
    components(
        schemas(
            course::dto::CourseInstanceResponseRestDTO,
            course::dto::PagingRestDTO,
            course::dto::GetCourseInstanceListResponseRestDTO,
            course::dto::AddTeacherRequestRestDTO,
            course::dto::TeacherTypeRestEnum,
            course::dto::PersonResponseRestDTO,

            dto::error::ErrorCode,
            dto::error::Cause,
            dto::error::ErrorResponseRestDTO,
        )
    ),
    tags(
        (name = "other", description = "Other utility endpoints"),
        (name = "course_management", description = "Course instances and teacher registration"),
    ),
)]
struct ApiDoc;

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
