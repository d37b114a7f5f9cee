// ==========================================
// EDGAR 温室气体数据管道 - 行映射器
// ==========================================
// 职责: 长表 → 类型化落库行（按列名取数 + 列投影）
// 约定: 连接辅助列（country 名称、LULUCF 国家口径的物质列）
//       在此处丢弃，落库列集与目标表一一对应
// ==========================================

use crate::domain::records::{
    EmissionSectoralRow, EmissionTotalRow, LulucfCountryRow, LulucfRegionRow, LulucfSectoralRow,
};
use crate::domain::table::DataTable;
use crate::engine::error::{TransformError, TransformResult};

fn required_column(table: &DataTable, name: &str) -> TransformResult<usize> {
    table
        .column_index(name)
        .ok_or_else(|| TransformError::column_not_found(name, &table.columns))
}

/// 取整数年份（重塑引擎已保证为整数）
fn year_at(table: &DataTable, row: usize, idx: usize) -> TransformResult<i32> {
    table.rows[row][idx]
        .as_i64()
        .map(|y| y as i32)
        .ok_or_else(|| TransformError::TypeMismatch {
            column: "year".to_string(),
            row,
            message: format!("期望整数年份，实际 {:?}", table.rows[row][idx]),
        })
}

/// 排放总量事实（合并后主键非空）
pub fn to_emission_total_rows(table: &DataTable) -> TransformResult<Vec<EmissionTotalRow>> {
    let code = required_column(table, "country_code")?;
    let year = required_column(table, "year")?;
    let total = required_column(table, "ghg_total")?;
    let per_capita = required_column(table, "ghg_per_capita")?;
    let per_gdp = required_column(table, "ghg_per_gdp")?;
    let source = required_column(table, "data_source")?;

    (0..table.row_count())
        .map(|i| {
            let row = &table.rows[i];
            Ok(EmissionTotalRow {
                country_code: row[code].as_text().ok_or_else(|| {
                    TransformError::TypeMismatch {
                        column: "country_code".to_string(),
                        row: i,
                        message: "合并后主键不应为空".to_string(),
                    }
                })?,
                year: year_at(table, i, year)?,
                ghg_total: row[total].as_f64(),
                ghg_per_capita: row[per_capita].as_f64(),
                ghg_per_gdp: row[per_gdp].as_f64(),
                data_source: row[source].as_text().unwrap_or_default(),
            })
        })
        .collect()
}

/// 分部门排放事实
pub fn to_emission_sectoral_rows(table: &DataTable) -> TransformResult<Vec<EmissionSectoralRow>> {
    let substance = required_column(table, "substance_code")?;
    let sector = required_column(table, "sector")?;
    let code = required_column(table, "country_code")?;
    let year = required_column(table, "year")?;
    let value = required_column(table, "ghg_value")?;
    let source = required_column(table, "data_source")?;

    (0..table.row_count())
        .map(|i| {
            let row = &table.rows[i];
            Ok(EmissionSectoralRow {
                substance_code: row[substance].as_text(),
                sector: row[sector].as_text(),
                country_code: row[code].as_text(),
                year: year_at(table, i, year)?,
                ghg_value: row[value].as_f64(),
                data_source: row[source].as_text().unwrap_or_default(),
            })
        })
        .collect()
}

/// LULUCF 国家事实（物质列在投影中丢弃）
pub fn to_lulucf_country_rows(table: &DataTable) -> TransformResult<Vec<LulucfCountryRow>> {
    let code = required_column(table, "country_code")?;
    let year = required_column(table, "year")?;
    let value = required_column(table, "ghg_value")?;
    let source = required_column(table, "data_source")?;

    (0..table.row_count())
        .map(|i| {
            let row = &table.rows[i];
            Ok(LulucfCountryRow {
                country_code: row[code].as_text(),
                year: year_at(table, i, year)?,
                ghg_value: row[value].as_f64(),
                data_source: row[source].as_text().unwrap_or_default(),
            })
        })
        .collect()
}

/// LULUCF 分部门事实
pub fn to_lulucf_sectoral_rows(table: &DataTable) -> TransformResult<Vec<LulucfSectoralRow>> {
    let substance = required_column(table, "substance_code")?;
    let sector = required_column(table, "sector")?;
    let code = required_column(table, "country_code")?;
    let year = required_column(table, "year")?;
    let value = required_column(table, "ghg_value")?;
    let source = required_column(table, "data_source")?;

    (0..table.row_count())
        .map(|i| {
            let row = &table.rows[i];
            Ok(LulucfSectoralRow {
                substance_code: row[substance].as_text(),
                sector: row[sector].as_text(),
                country_code: row[code].as_text(),
                year: year_at(table, i, year)?,
                ghg_value: row[value].as_f64(),
                data_source: row[source].as_text().unwrap_or_default(),
            })
        })
        .collect()
}

/// LULUCF 宏区域事实
pub fn to_lulucf_region_rows(table: &DataTable) -> TransformResult<Vec<LulucfRegionRow>> {
    let region = required_column(table, "macro_region")?;
    let year = required_column(table, "year")?;
    let value = required_column(table, "ghg_value")?;
    let source = required_column(table, "data_source")?;

    (0..table.row_count())
        .map(|i| {
            let row = &table.rows[i];
            Ok(LulucfRegionRow {
                macro_region: row[region].as_text(),
                year: year_at(table, i, year)?,
                ghg_value: row[value].as_f64(),
                data_source: row[source].as_text().unwrap_or_default(),
            })
        })
        .collect()
}
