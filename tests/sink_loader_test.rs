// ==========================================
// EDGAR 温室气体数据管道 - 落库契约集成测试
// ==========================================
// 覆盖: 追加写入、命名空间寻址、事务内失败、失败后继续可用
// ==========================================


use edgar_ghg_etl::domain::{LulucfRegionRow, SubstanceRow};
use edgar_ghg_etl::engine::dimension::substance_rows;
use edgar_ghg_etl::repository::{RelationalSink, RepositoryError, SqliteSink};
use rusqlite::Connection;
use test_helpers::create_sink_db;

#[test]
fn test_append_writes_through_namespace() {
    let (_temp, db_path) = create_sink_db().expect("创建测试目标库失败");
    let sink = SqliteSink::open(&db_path, "edgar_data").expect("打开落库失败");
    assert_eq!(sink.namespace(), "edgar_data");

    let count = sink.append(&substance_rows()).expect("写入失败");
    assert_eq!(count, 4);

    // 直连库文件验证（不经命名空间别名）
    let conn = Connection::open(&db_path).unwrap();
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM substance", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 4);

    let info: String = conn
        .query_row(
            "SELECT substance_info FROM substance WHERE substance_code = 'F-gases'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(info, "Fluorinated gases");
}

#[test]
fn test_append_is_append_only() {
    let (_temp, db_path) = create_sink_db().expect("创建测试目标库失败");
    let sink = SqliteSink::open(&db_path, "edgar_data").expect("打开落库失败");

    sink.append(&substance_rows()).unwrap();
    sink.append(&substance_rows()).unwrap();

    // 无 upsert 语义: 两次写入累加
    let conn = Connection::open(&db_path).unwrap();
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM substance", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 8);
}

#[test]
fn test_failed_table_leaves_sink_usable() {
    let (_temp, db_path) = create_sink_db().expect("创建测试目标库失败");
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch("DROP TABLE substance").unwrap();
    drop(conn);

    let sink = SqliteSink::open(&db_path, "edgar_data").expect("打开落库失败");

    // 表缺失 → 该表写入失败
    assert!(sink.append(&substance_rows()).is_err());

    // 失败不跨表传播: 其他表照常写入
    let rows = vec![LulucfRegionRow {
        macro_region: Some("Oceania".to_string()),
        year: 2021,
        ghg_value: Some(-3.0),
        data_source: "Calculation_2026".to_string(),
    }];
    assert_eq!(sink.append(&rows).unwrap(), 1);
}

#[test]
fn test_append_empty_rows_is_noop() {
    let (_temp, db_path) = create_sink_db().expect("创建测试目标库失败");
    let sink = SqliteSink::open(&db_path, "edgar_data").expect("打开落库失败");

    // 下游须优雅容忍空输入（无年份列的重塑产物）
    let rows: Vec<SubstanceRow> = Vec::new();
    assert_eq!(sink.append(&rows).unwrap(), 0);
}

#[test]
fn test_open_rejects_bad_namespace() {
    let (_temp, db_path) = create_sink_db().expect("创建测试目标库失败");
    let result = SqliteSink::open(&db_path, "bad-namespace");
    assert!(matches!(result, Err(RepositoryError::InvalidNamespace(_))));
}
