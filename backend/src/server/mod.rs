//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::RegistrationService;
use crate::inbound::http::calculator::{add, calculate, greet, index, multiply, post_message};
use crate::inbound::http::error::route_not_found;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::registration::{list_users, register_user};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::json_error_handler;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub json_limit: usize,
}

/// Assemble the application: JSON limits, tracing, the `/api/v1` scope,
/// health probes and, in debug builds, Swagger UI.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        json_limit,
    } = deps;

    let json_config = web::JsonConfig::default()
        .limit(json_limit)
        .error_handler(json_error_handler);

    let api = web::scope("/api/v1")
        .service(index)
        .service(greet)
        .service(register_user)
        .service(list_users)
        .service(calculate)
        .service(multiply)
        .service(add)
        .service(post_message);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address, JSON limit and registry.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        json_limit,
        registry,
    } = config;
    let http_state = web::Data::new(HttpState::from(RegistrationService::new(registry)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            json_limit,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, json_limit, "registry server listening");
    health_state.mark_ready();
    Ok(server)
}
