// ==========================================
// EDGAR 温室气体数据管道 - 事实合成器
// ==========================================
// 职责: 同键长表左连接、空主键剪枝、来源标签、代码标准化
// 约定: 连接键任一分量为空则不命中；右表同键多行按行扇出；
//       仅存在于右表的键被静默丢弃（见 drop_where_null）
// ==========================================

use crate::domain::table::{CellValue, DataTable};
use crate::engine::error::{TransformError, TransformResult};
use crate::engine::overrides::CodeRewrite;
use std::collections::HashMap;

/// 连接键的规范文本（任一分量为空 → None，不参与匹配）
fn join_key(row: &[CellValue], indices: &[usize]) -> Option<String> {
    let mut parts = Vec::with_capacity(indices.len());
    for &idx in indices {
        parts.push(row[idx].as_text()?);
    }
    Some(parts.join("\u{1f}"))
}

fn resolve_columns(table: &DataTable, names: &[&str]) -> TransformResult<Vec<usize>> {
    names
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| TransformError::column_not_found(name, &table.columns))
        })
        .collect()
}

/// 左连接
///
/// # 参数
/// - base: 基表（全部行保留）
/// - right: 次表（非键列并入输出）
/// - keys: 两表共有的完整连接键
///
/// # 返回
/// - Ok(DataTable): base 列 + right 非键列；未命中处为空值
/// - Err: 键列缺失
pub fn left_join(base: &DataTable, right: &DataTable, keys: &[&str]) -> TransformResult<DataTable> {
    let base_keys = resolve_columns(base, keys)?;
    let right_keys = resolve_columns(right, keys)?;

    // 右表非键列
    let extra: Vec<usize> = (0..right.column_count())
        .filter(|idx| !right_keys.contains(idx))
        .collect();

    let mut columns = base.columns.clone();
    columns.extend(extra.iter().map(|&idx| right.columns[idx].clone()));
    let mut out = DataTable::new(columns);

    // 索引右表（同键多行全部保留）
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (row_idx, row) in right.rows.iter().enumerate() {
        if let Some(key) = join_key(row, &right_keys) {
            index.entry(key).or_default().push(row_idx);
        }
    }

    for row in &base.rows {
        let matches = join_key(row, &base_keys).and_then(|key| index.get(&key));
        match matches {
            Some(hits) => {
                for &hit in hits {
                    let mut merged = row.clone();
                    merged.extend(extra.iter().map(|&idx| right.rows[hit][idx].clone()));
                    out.push_row(merged);
                }
            }
            None => {
                let mut merged = row.clone();
                merged.extend(extra.iter().map(|_| CellValue::Null));
                out.push_row(merged);
            }
        }
    }

    Ok(out)
}

/// 剔除指定列为空的行，返回剔除行数
///
/// 用于连接后的主键剪枝: 仅存在于次表的键在左连接中
/// 不会出现在输出里，基表中主键为空的行在此处丢弃。
pub fn drop_where_null(table: &mut DataTable, column: &str) -> TransformResult<usize> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| TransformError::column_not_found(column, &table.columns))?;

    let before = table.row_count();
    table.rows.retain(|row| !row[idx].is_null());
    Ok(before - table.row_count())
}

/// 整列赋常量文本（列不存在则追加）
///
/// 用于 data_source 来源标签。
pub fn set_literal_column(table: &mut DataTable, name: &str, value: &str) {
    match table.column_index(name) {
        Some(idx) => {
            for row in &mut table.rows {
                row[idx] = CellValue::Text(value.to_string());
            }
        }
        None => {
            table.columns.push(name.to_string());
            for row in &mut table.rows {
                row.push(CellValue::Text(value.to_string()));
            }
        }
    }
}

/// 按序套用代码改写规则，返回改写单元格数
pub fn rewrite_column(
    table: &mut DataTable,
    column: &str,
    rules: &[CodeRewrite],
) -> TransformResult<usize> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| TransformError::column_not_found(column, &table.columns))?;

    let mut changed = 0;
    for rule in rules {
        for row in &mut table.rows {
            if matches!(&row[idx], CellValue::Text(s) if s == rule.from) {
                row[idx] = CellValue::Text(rule.to.to_string());
                changed += 1;
            }
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::overrides::{COUNTRY_CODE_REWRITES, SUBSTANCE_CODE_ALIASES};

    fn long(columns: &[&str], rows: Vec<Vec<CellValue>>) -> DataTable {
        let mut table = DataTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row);
        }
        table
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_left_join_missing_secondary_yields_null() {
        let base = long(
            &["country_code", "country", "year", "ghg_total"],
            vec![
                vec![text("ITA"), text("Italy"), CellValue::Int(2020), CellValue::Number(400.0)],
                vec![text("FRA"), text("France"), CellValue::Int(2020), CellValue::Number(300.0)],
            ],
        );
        let right = long(
            &["country_code", "country", "year", "ghg_per_capita"],
            vec![vec![
                text("ITA"),
                text("Italy"),
                CellValue::Int(2020),
                CellValue::Number(6.6),
            ]],
        );

        let joined = left_join(&base, &right, &["country_code", "country", "year"]).unwrap();

        assert_eq!(joined.row_count(), 2);
        assert_eq!(joined.columns.last().unwrap(), "ghg_per_capita");
        assert_eq!(joined.rows[0][4], CellValue::Number(6.6));
        // 次表缺失年份 → 空值，属预期而非错误
        assert!(joined.rows[1][4].is_null());
    }

    #[test]
    fn test_left_join_right_only_keys_absent() {
        let base = long(
            &["country_code", "year", "ghg_total"],
            vec![vec![text("ITA"), CellValue::Int(2020), CellValue::Number(400.0)]],
        );
        let right = long(
            &["country_code", "year", "ghg_per_gdp"],
            vec![
                vec![text("ITA"), CellValue::Int(2020), CellValue::Number(0.2)],
                vec![text("ABW"), CellValue::Int(2020), CellValue::Number(0.9)],
            ],
        );

        let joined = left_join(&base, &right, &["country_code", "year"]).unwrap();

        // 仅存在于次表的 ABW 被静默丢弃
        assert_eq!(joined.row_count(), 1);
        assert_eq!(joined.rows[0][0], text("ITA"));
    }

    #[test]
    fn test_left_join_null_key_never_matches() {
        let base = long(
            &["country_code", "year", "ghg_total"],
            vec![vec![CellValue::Null, CellValue::Int(2020), CellValue::Number(1.0)]],
        );
        let right = long(
            &["country_code", "year", "ghg_per_capita"],
            vec![vec![CellValue::Null, CellValue::Int(2020), CellValue::Number(2.0)]],
        );

        let joined = left_join(&base, &right, &["country_code", "year"]).unwrap();
        assert_eq!(joined.row_count(), 1);
        assert!(joined.rows[0][3].is_null());
    }

    #[test]
    fn test_left_join_duplicate_right_keys_fan_out() {
        let base = long(
            &["country_code", "year", "ghg_total"],
            vec![vec![text("ITA"), CellValue::Int(2020), CellValue::Number(400.0)]],
        );
        let right = long(
            &["country_code", "year", "ghg_per_capita"],
            vec![
                vec![text("ITA"), CellValue::Int(2020), CellValue::Number(6.6)],
                vec![text("ITA"), CellValue::Int(2020), CellValue::Number(6.7)],
            ],
        );

        let joined = left_join(&base, &right, &["country_code", "year"]).unwrap();

        // 源数据缺陷透传: 右表重复键扇出为两行
        assert_eq!(joined.row_count(), 2);
    }

    #[test]
    fn test_drop_where_null_prunes_primary_key() {
        let mut table = long(
            &["country_code", "year", "ghg_total"],
            vec![
                vec![text("ITA"), CellValue::Int(2020), CellValue::Number(400.0)],
                vec![CellValue::Null, CellValue::Int(2020), CellValue::Number(1.0)],
            ],
        );

        let dropped = drop_where_null(&mut table, "country_code").unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(table.row_count(), 1);
        assert!(table.rows.iter().all(|r| !r[0].is_null()));
    }

    #[test]
    fn test_set_literal_column_appends_then_overwrites() {
        let mut table = long(
            &["country_code"],
            vec![vec![text("ITA")], vec![text("FRA")]],
        );

        set_literal_column(&mut table, "data_source", "EDGAR_2025");
        assert_eq!(table.columns, vec!["country_code", "data_source"]);
        assert_eq!(table.rows[1][1], text("EDGAR_2025"));

        set_literal_column(&mut table, "data_source", "Calculation_2026");
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows[0][1], text("Calculation_2026"));
    }

    #[test]
    fn test_rewrite_global_total() {
        let mut table = long(
            &["country_code", "ghg_total"],
            vec![
                vec![text("GLOBAL TOTAL"), CellValue::Number(45.2)],
                vec![text("ITA"), CellValue::Number(0.4)],
            ],
        );

        let changed = rewrite_column(&mut table, "country_code", COUNTRY_CODE_REWRITES).unwrap();
        assert_eq!(changed, 1);
        assert_eq!(table.rows[0][0], text("GLOBAL"));
        assert_eq!(table.rows[1][0], text("ITA"));
    }

    #[test]
    fn test_rewrite_substance_aliases_pass_through_others() {
        let mut table = long(
            &["substance_code"],
            vec![
                vec![text("GWP_100_AR5_CH4")],
                vec![text("GWP_100_AR5_F-gases")],
                vec![text("GWP_100_AR5_N2O")],
                vec![text("CO2")],
            ],
        );

        rewrite_column(&mut table, "substance_code", SUBSTANCE_CODE_ALIASES).unwrap();
        let codes: Vec<_> = table.rows.iter().map(|r| r[0].as_text().unwrap()).collect();
        assert_eq!(codes, vec!["CH4", "F-gases", "N2O", "CO2"]);
    }
}
