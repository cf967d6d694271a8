use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction, pool::PoolConnection};

use crate::vacancy_request::{
    domain::model::enums::vacancy_request_domain_error::VacancyRequestDomainError,
    infrastructure::persistence::repositories::{
        postgres::sqlx_vacancy_request_row_mapper::map_infra_error,
        unit_of_work::{VacancyRequestUnitOfWork, VacancyRequestUnitOfWorkFactory},
    },
};

enum SqlxConnection {
    Pooled(PoolConnection<Postgres>),
    Transaction(Transaction<'static, Postgres>),
}

/// Implements every vacancy request repository over one connection. A
/// transaction rolls back when dropped without `commit`.
pub struct SqlxVacancyRequestUnitOfWork {
    connection: SqlxConnection,
}

impl SqlxVacancyRequestUnitOfWork {
    pub(super) fn connection(&mut self) -> &mut PgConnection {
        match &mut self.connection {
            SqlxConnection::Pooled(connection) => &mut **connection,
            SqlxConnection::Transaction(transaction) => &mut **transaction,
        }
    }
}

#[async_trait]
impl VacancyRequestUnitOfWork for SqlxVacancyRequestUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), VacancyRequestDomainError> {
        match self.connection {
            SqlxConnection::Transaction(transaction) => {
                transaction.commit().await.map_err(map_infra_error)
            }
            SqlxConnection::Pooled(_) => Ok(()),
        }
    }
}

pub struct SqlxVacancyRequestUnitOfWorkFactoryImpl {
    pool: PgPool,
}

impl SqlxVacancyRequestUnitOfWorkFactoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRequestUnitOfWorkFactory for SqlxVacancyRequestUnitOfWorkFactoryImpl {
    async fn begin(&self) -> Result<Box<dyn VacancyRequestUnitOfWork>, VacancyRequestDomainError> {
        let transaction = self.pool.begin().await.map_err(map_infra_error)?;
        Ok(Box::new(SqlxVacancyRequestUnitOfWork {
            connection: SqlxConnection::Transaction(transaction),
        }))
    }

    async fn session(
        &self,
    ) -> Result<Box<dyn VacancyRequestUnitOfWork>, VacancyRequestDomainError> {
        let connection = self.pool.acquire().await.map_err(map_infra_error)?;
        Ok(Box::new(SqlxVacancyRequestUnitOfWork {
            connection: SqlxConnection::Pooled(connection),
        }))
    }
}
