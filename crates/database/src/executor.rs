use crate::connection::{Database, release};
use crate::error::DbError;
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Connection, FromRow};

/// A fixed SQL statement with `?` placeholders.
///
/// `name` identifies the statement in logs and errors without echoing any
/// bound values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    pub name: &'static str,
    pub sql: &'static str,
}

/// A value bound to one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param<'a> {
    Int(i64),
    Text(&'a str),
}

impl Database {
    /// Runs a read statement and returns every row in the order the engine
    /// produced them.
    pub async fn fetch_all<T>(
        &self,
        statement: &Statement,
        params: &[Param<'_>],
    ) -> Result<Vec<T>, DbError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query_as::<_, T>(statement.sql);
        for param in params {
            query = match *param {
                Param::Int(value) => query.bind(value),
                Param::Text(value) => query.bind(value),
            };
        }
        let result = query.fetch_all(&mut conn).await;

        release(conn).await;
        result.map_err(|e| query_failed(statement, e))
    }

    /// Runs a write statement in its own transaction and returns the number of
    /// affected rows. The transaction is rolled back if the statement fails.
    pub async fn execute(&self, statement: &Statement, params: &[Param<'_>]) -> Result<u64, DbError> {
        let mut conn = self.connect().await?;
        let result = execute_in_transaction(&mut conn, statement, params).await;
        release(conn).await;
        result.map_err(|e| query_failed(statement, e))
    }
}

async fn execute_in_transaction(
    conn: &mut MySqlConnection,
    statement: &Statement,
    params: &[Param<'_>],
) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let mut query = sqlx::query(statement.sql);
    for param in params {
        query = match *param {
            Param::Int(value) => query.bind(value),
            Param::Text(value) => query.bind(value),
        };
    }

    match query.execute(&mut *tx).await {
        Ok(done) => {
            tx.commit().await?;
            Ok(done.rows_affected())
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(
                    statement = statement.name,
                    error = %rollback_err,
                    "Rollback failed."
                );
            }
            Err(e)
        }
    }
}

fn query_failed(statement: &Statement, source: sqlx::Error) -> DbError {
    tracing::error!(statement = statement.name, error = %source, "Database query error.");
    DbError::Query {
        statement: statement.name,
        source,
    }
}
