// ==========================================
// EDGAR 温室气体数据管道 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有连接的 PRAGMA 行为（外键/忙等待）
// - 目标命名空间以 ATTACH 方式挂载，写入统一走 <命名空间>.<表名>
// ==========================================

use rusqlite::{params, Connection};
use std::path::Path;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 把目标库文件挂载为命名空间
///
/// 调用方负责保证 namespace 已通过标识符校验。
pub fn attach_namespace(conn: &Connection, db_path: &Path, namespace: &str) -> rusqlite::Result<()> {
    let sql = format!("ATTACH DATABASE ?1 AS {namespace}");
    conn.execute(&sql, params![db_path.to_string_lossy()])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_and_attach() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        attach_namespace(&conn, temp.path(), "edgar_data").unwrap();

        conn.execute_batch("CREATE TABLE edgar_data.t (x INTEGER)").unwrap();
        conn.execute("INSERT INTO edgar_data.t (x) VALUES (1)", []).unwrap();
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM edgar_data.t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }
}
