// ==========================================
// EDGAR 温室气体数据管道 - 重塑引擎
// ==========================================
// 职责: 宽表（每年一列）→ 长表（每标识组合×年一行）
// 约定: 年份列按"表头为纯数字串"逐表识别，不做硬编码；
//       年份以外全空的输出行剪枝；年份转整数
// ==========================================

use crate::domain::table::{CellValue, DataTable};
use crate::engine::error::{TransformError, TransformResult};

/// 重塑规格
///
/// id_columns 为 (源表头, 输出列名) 对，改名在重塑时一并完成；
/// 源表中既非标识列也非年份列的列被丢弃。
#[derive(Debug, Clone)]
pub struct MeltSpec<'a> {
    pub id_columns: &'a [(&'a str, &'a str)],
    pub value_name: &'a str,
}

/// 表头是否为年份（非空纯十进制数字串）
pub fn is_year_header(header: &str) -> bool {
    !header.is_empty() && header.chars().all(|c| c.is_ascii_digit())
}

/// 识别年份列，返回 (列下标, 年份)
///
/// 逐表识别，源表年份范围漂移自动兼容。
pub fn year_columns(table: &DataTable) -> Vec<(usize, i64)> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, header)| is_year_header(header))
        .filter_map(|(idx, header)| header.parse::<i64>().ok().map(|year| (idx, year)))
        .collect()
}

/// 宽表 → 长表
///
/// # 参数
/// - table: 源宽表
/// - spec: 标识列与数值列名
///
/// # 返回
/// - Ok(DataTable): 列为 [标识列…, year, value_name] 的长表
/// - Err: 标识列缺失（畸形工作表）
///
/// # 约定
/// - 剪枝前输出行数 = 源行数 × 年份列数
/// - 剪枝: 除 year 外全空的行丢弃（合法的 0 / 负值保留）
/// - 无年份列 → 空长表，不报错
/// - 源表中重复的标识组合原样透传，不去重
pub fn melt_years(table: &DataTable, spec: &MeltSpec) -> TransformResult<DataTable> {
    // 解析标识列下标
    let mut id_indices = Vec::with_capacity(spec.id_columns.len());
    for (source, _) in spec.id_columns {
        let idx = table
            .column_index(source)
            .ok_or_else(|| TransformError::column_not_found(source, &table.columns))?;
        id_indices.push(idx);
    }

    let years = year_columns(table);

    // 输出列: 标识列（改名后）+ year + 数值列
    let mut columns: Vec<String> = spec
        .id_columns
        .iter()
        .map(|(_, out)| out.to_string())
        .collect();
    columns.push("year".to_string());
    columns.push(spec.value_name.to_string());
    let mut long = DataTable::new(columns);

    for row in &table.rows {
        for &(year_idx, year) in &years {
            let ids: Vec<CellValue> = id_indices.iter().map(|&i| row[i].clone()).collect();
            let value = row[year_idx].clone();

            // 除 year 外全空 → 剪枝
            if value.is_null() && ids.iter().all(CellValue::is_null) {
                continue;
            }

            let mut out = ids;
            out.push(CellValue::Int(year));
            out.push(value);
            long.push_row(out);
        }
    }

    Ok(long)
}
