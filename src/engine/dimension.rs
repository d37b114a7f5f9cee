// ==========================================
// EDGAR 温室气体数据管道 - 维表构建
// ==========================================
// 职责: 国家维表（双表合并 + 人工修正）与物质维表（固定 4 行）
// ==========================================

use crate::domain::records::{CountryRow, SubstanceRow};
use crate::domain::table::DataTable;
use crate::engine::error::{TransformError, TransformResult};
use crate::engine::overrides::apply_country_overrides;
use crate::engine::{COL_COUNTRY, COL_COUNTRY_CODE, COL_MACRO_REGION};
use std::collections::{HashMap, HashSet};

/// 物质维表固定行
pub fn substance_rows() -> Vec<SubstanceRow> {
    [
        ("CO2", "Carbon dioxide"),
        ("CH4", "Methane"),
        ("N2O", "Nitrous oxide"),
        ("F-gases", "Fluorinated gases"),
    ]
    .iter()
    .map(|(code, info)| SubstanceRow {
        substance_code: code.to_string(),
        substance_info: info.to_string(),
    })
    .collect()
}

/// 取 (键列, 值列) 去重对，按键首次出现保留
///
/// 与源数据口径一致: 空键同样作为一个去重键参与。
fn unique_pairs(
    table: &DataTable,
    key_column: &str,
    value_column: &str,
) -> TransformResult<Vec<(Option<String>, Option<String>)>> {
    let key_idx = table
        .column_index(key_column)
        .ok_or_else(|| TransformError::column_not_found(key_column, &table.columns))?;
    let value_idx = table
        .column_index(value_column)
        .ok_or_else(|| TransformError::column_not_found(value_column, &table.columns))?;

    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut pairs = Vec::new();
    for row in &table.rows {
        let key = row[key_idx].as_text();
        if seen.insert(key.clone()) {
            pairs.push((key, row[value_idx].as_text()));
        }
    }
    Ok(pairs)
}

/// 构建国家维表
///
/// # 参数
/// - totals: GHG_totals_by_country 宽表（代码/名称来源）
/// - lulucf: LULUCF_countries 宽表（宏区域来源）
///
/// # 返回
/// - Ok(Vec<CountryRow>): 以 totals 为准左连接宏区域，
///   人工修正表按序套用后剔除全空行
/// - Err: 必需列缺失
///
/// # 约定
/// - 两侧均按代码首次出现去重
/// - 空代码不参与连接
/// - 未列入修正表的代码不做任何改动
pub fn build_country_dimension(
    totals: &DataTable,
    lulucf: &DataTable,
) -> TransformResult<Vec<CountryRow>> {
    let names = unique_pairs(totals, COL_COUNTRY_CODE, COL_COUNTRY)?;
    let regions = unique_pairs(lulucf, COL_COUNTRY_CODE, COL_MACRO_REGION)?;

    // 代码 → 宏区域（空代码不入索引）
    let region_map: HashMap<String, Option<String>> = regions
        .into_iter()
        .filter_map(|(code, region)| code.map(|c| (c, region)))
        .collect();

    let mut rows: Vec<CountryRow> = names
        .into_iter()
        .map(|(code, country)| {
            let macro_region = code
                .as_ref()
                .and_then(|c| region_map.get(c))
                .cloned()
                .flatten();
            CountryRow {
                country_code: code,
                country,
                macro_region,
            }
        })
        .collect();

    apply_country_overrides(&mut rows);

    // 剔除全空行
    rows.retain(|row| {
        row.country_code.is_some() || row.country.is_some() || row.macro_region.is_some()
    });

    Ok(rows)
}
