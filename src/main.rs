use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vacancy_approval_api::{
    authorization::{
        build_authorization_router,
        interfaces::rest::resources::{
            authorization_error_response_resource::AuthorizationErrorResponseResource,
            evaluate_authorization_request_resource::{
                EvaluateAuthorizationRequestResource, EvaluateAuthorizationResponseResource,
            },
            role_permissions_resource::RolePermissionsResource,
        },
    },
    config::app_config::AppConfig,
    shared::{
        app_context::AppContext, interfaces::rest::openapi::security::GatewayHeadersSecurityAddon,
    },
    vacancy_request::{
        build_vacancy_request_router,
        interfaces::rest::resources::{
            approval_task_request_resource::{
                ApprovalDecisionRequestResource, SaveApprovalTasksRequestResource,
            },
            approval_task_resource::{
                ApprovalDecisionResponseResource, ApprovalHistoryResource, ApprovalTaskResource,
                FieldChangeResource,
            },
            change_vacancy_request_status_request_resource::ChangeVacancyRequestStatusRequestResource,
            create_vacancy_request_request_resource::CreateVacancyRequestRequestResource,
            update_vacancy_request_request_resource::UpdateVacancyRequestRequestResource,
            vacancy_request_details_resource::VacancyRequestDetailsResource,
            vacancy_request_error_response_resource::VacancyRequestErrorResponseResource,
            vacancy_request_resource::{VacancyRequestResource, VacancyResource},
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::create_vacancy_request,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::get_vacancy_request,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::update_vacancy_request,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::change_vacancy_request_status,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::save_approval_tasks,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::list_approval_tasks,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::list_approval_history,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::approve_approval_task,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::request_changes_approval_task,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::reject_approval_task,
        vacancy_approval_api::vacancy_request::interfaces::rest::controllers::vacancy_request_rest_controller::create_vacancy_from_request,
        vacancy_approval_api::authorization::interfaces::rest::controllers::authorization_rest_controller::list_role_permissions,
        vacancy_approval_api::authorization::interfaces::rest::controllers::authorization_rest_controller::evaluate_authorization
    ),
    components(
        schemas(
            VacancyRequestDetailsResource,
            CreateVacancyRequestRequestResource,
            UpdateVacancyRequestRequestResource,
            ChangeVacancyRequestStatusRequestResource,
            SaveApprovalTasksRequestResource,
            ApprovalDecisionRequestResource,
            VacancyRequestResource,
            VacancyResource,
            ApprovalTaskResource,
            ApprovalHistoryResource,
            FieldChangeResource,
            ApprovalDecisionResponseResource,
            VacancyRequestErrorResponseResource,
            EvaluateAuthorizationRequestResource,
            EvaluateAuthorizationResponseResource,
            RolePermissionsResource,
            AuthorizationErrorResponseResource
        )
    ),
    tags(
        (name = "vacancy-requests", description = "Vacancy request approval workflow bounded context"),
        (name = "authorization", description = "Route authorization rule engine bounded context")
    ),
    modifiers(&GatewayHeadersSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();
    let context = AppContext::initialize(config.clone())
        .await
        .expect("failed to initialize application context");

    let app = Router::new()
        .merge(build_vacancy_request_router(&context))
        .merge(build_authorization_router(&context))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "server listening");
    tracing::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
