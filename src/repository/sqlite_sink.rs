// ==========================================
// EDGAR 温室气体数据管道 - SQLite 落库实现
// ==========================================
// 职责: RelationalSink 的 SQLite 实现
// 约定: 目标库文件以命名空间挂载；一次 append 一个事务；
//       目标表需预先存在（建表不在本系统范围内）
// ==========================================

use crate::db::{attach_namespace, configure_sqlite_connection};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::sink::{RelationalSink, SinkRow};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

// ==========================================
// SqliteSink
// ==========================================
pub struct SqliteSink {
    conn: Mutex<Connection>,
    namespace: String,
}

impl SqliteSink {
    /// 打开目标库并挂载命名空间
    ///
    /// # 参数
    /// - db_path: 目标库文件路径
    /// - namespace: 固定命名空间（如 edgar_data）
    pub fn open<P: AsRef<Path>>(db_path: P, namespace: &str) -> RepositoryResult<Self> {
        validate_namespace(namespace)?;

        let conn = Connection::open_in_memory()
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        configure_sqlite_connection(&conn)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        attach_namespace(&conn, db_path.as_ref(), namespace)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
            namespace: namespace.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl RelationalSink for SqliteSink {
    fn append<R: SinkRow>(&self, rows: &[R]) -> RepositoryResult<usize> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let sql = insert_sql::<R>(&self.namespace);
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in rows {
                stmt.execute(rusqlite::params_from_iter(row.bind()))?;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(rows.len())
    }
}

/// 生成追加写入 SQL
fn insert_sql<R: SinkRow>(namespace: &str) -> String {
    let placeholders: Vec<String> = (1..=R::COLUMNS.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {namespace}.{table} ({columns}) VALUES ({placeholders})",
        table = R::TABLE,
        columns = R::COLUMNS.join(", "),
        placeholders = placeholders.join(", "),
    )
}

/// 校验命名空间为合法 SQL 标识符（拼入 SQL 前的唯一通路）
fn validate_namespace(namespace: &str) -> RepositoryResult<()> {
    let mut chars = namespace.chars();
    let head_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if head_ok && namespace.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(RepositoryError::InvalidNamespace(namespace.to_string()))
    }
}
