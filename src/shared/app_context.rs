use std::sync::Arc;

use sqlx::{migrate, postgres::PgPoolOptions};

use crate::{
    authorization::{
        application::query_services::authorization_query_service_impl::AuthorizationQueryServiceImpl,
        domain::{
            model::enums::authorization_domain_error::AuthorizationDomainError,
            services::{
                authorization_query_service::AuthorizationQueryService,
                rule_table::{RuleTable, RuleTableBuilder},
            },
        },
    },
    config::app_config::AppConfig,
    shared::app_context_error::AppContextError,
    vacancy_request::{
        application::{
            acl::{
                request_ownership_facade_impl::RequestOwnershipFacadeImpl,
                sqlx_notification_outbox_facade_impl::SqlxNotificationOutboxFacadeImpl,
                sqlx_space_directory_facade_impl::SqlxSpaceDirectoryFacadeImpl,
            },
            command_services::{
                approval_task_manager::ApprovalTaskManager,
                vacancy_request_command_service_impl::VacancyRequestCommandServiceImpl,
            },
            query_services::vacancy_request_query_service_impl::VacancyRequestQueryServiceImpl,
        },
        domain::services::{
            vacancy_request_command_service::VacancyRequestCommandService,
            vacancy_request_query_service::VacancyRequestQueryService,
        },
        infrastructure::persistence::repositories::{
            postgres::sqlx_vacancy_request_unit_of_work_impl::SqlxVacancyRequestUnitOfWorkFactoryImpl,
            unit_of_work::VacancyRequestUnitOfWorkFactory,
        },
        interfaces::{
            acl::space_directory_facade::SpaceDirectoryFacade,
            rest::vacancy_request_rule_catalog::register_vacancy_request_rules,
        },
    },
};

/// Everything built once at startup and shared by the routers.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub rule_table: Arc<RuleTable>,
    pub authorization_query_service: Arc<dyn AuthorizationQueryService>,
    pub vacancy_request_command_service: Arc<dyn VacancyRequestCommandService>,
    pub vacancy_request_query_service: Arc<dyn VacancyRequestQueryService>,
}

impl AppContext {
    pub async fn initialize(config: AppConfig) -> Result<Self, AppContextError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.postgres_max_connections)
            .connect(&config.database_url())
            .await?;

        migrate!("./migrations").run(&pool).await?;

        let rule_table = Arc::new(build_rule_table()?);

        let directory_facade: Arc<dyn SpaceDirectoryFacade> =
            Arc::new(SqlxSpaceDirectoryFacadeImpl::new(pool.clone()));
        let notification_facade = Arc::new(SqlxNotificationOutboxFacadeImpl::new(pool.clone()));
        let unit_of_work_factory: Arc<dyn VacancyRequestUnitOfWorkFactory> =
            Arc::new(SqlxVacancyRequestUnitOfWorkFactoryImpl::new(pool));
        let task_manager = Arc::new(ApprovalTaskManager::new(directory_facade.clone()));

        let ownership_facade = Arc::new(RequestOwnershipFacadeImpl::new(
            unit_of_work_factory.clone(),
            task_manager.clone(),
        ));
        let authorization_query_service = Arc::new(AuthorizationQueryServiceImpl::new(
            rule_table.clone(),
            ownership_facade,
            config.authz_default_allow,
        ));

        let vacancy_request_command_service = Arc::new(VacancyRequestCommandServiceImpl::new(
            unit_of_work_factory.clone(),
            directory_facade.clone(),
            task_manager,
            notification_facade,
        ));
        let vacancy_request_query_service = Arc::new(VacancyRequestQueryServiceImpl::new(
            unit_of_work_factory,
            directory_facade,
        ));

        tracing::info!(
            rules = rule_table.len(),
            default_allow = config.authz_default_allow,
            "application context initialized"
        );

        Ok(Self {
            config,
            rule_table,
            authorization_query_service,
            vacancy_request_command_service,
            vacancy_request_query_service,
        })
    }
}

pub fn build_rule_table() -> Result<RuleTable, AuthorizationDomainError> {
    let mut builder = RuleTableBuilder::new();
    register_vacancy_request_rules(&mut builder)?;
    Ok(builder.build())
}
