// ==========================================
// EDGAR 温室气体数据管道 - 落库契约
// ==========================================
// 职责: 逐表追加写入接口（SinkRow 固定表名/列集/参数绑定）
// 约定: 目标表需预先存在，建表不在本系统范围内
// ==========================================

use crate::domain::records::{
    CountryRow, EmissionSectoralRow, EmissionTotalRow, LulucfCountryRow, LulucfRegionRow,
    LulucfSectoralRow, SubstanceRow,
};
use crate::repository::error::RepositoryResult;
use rusqlite::types::Value;
use serde::Serialize;

// ==========================================
// SinkRow Trait
// ==========================================
// 用途: 单实体的落库契约（表名 + 列集 + 参数绑定）
// 实现者: domain::records 下的 7 个行实体
pub trait SinkRow: Serialize {
    /// 目标表名（固定）
    const TABLE: &'static str;

    /// 目标列集（与 bind 输出一一对应）
    const COLUMNS: &'static [&'static str];

    /// 绑定为参数值
    fn bind(&self) -> Vec<Value>;
}

// ==========================================
// RelationalSink Trait
// ==========================================
// 用途: 关系库写入接口（编排层唯一出口）
// 实现者: SqliteSink；测试中以记录型 mock 实现
pub trait RelationalSink {
    /// 追加写入一批行
    ///
    /// # 返回
    /// - Ok(usize): 写入行数
    /// - Err: 连接/事务/约束等写入失败（由编排层逐表捕获）
    fn append<R: SinkRow>(&self, rows: &[R]) -> RepositoryResult<usize>;
}

// ==========================================
// 行实体的落库契约
// ==========================================

impl SinkRow for CountryRow {
    const TABLE: &'static str = "country";
    const COLUMNS: &'static [&'static str] = &["country_code", "country", "macro_region"];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.country_code.clone()),
            Value::from(self.country.clone()),
            Value::from(self.macro_region.clone()),
        ]
    }
}

impl SinkRow for SubstanceRow {
    const TABLE: &'static str = "substance";
    const COLUMNS: &'static [&'static str] = &["substance_code", "substance_info"];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.substance_code.clone()),
            Value::from(self.substance_info.clone()),
        ]
    }
}

impl SinkRow for EmissionTotalRow {
    const TABLE: &'static str = "emission_total";
    const COLUMNS: &'static [&'static str] = &[
        "country_code",
        "year",
        "ghg_total",
        "ghg_per_capita",
        "ghg_per_gdp",
        "data_source",
    ];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.country_code.clone()),
            Value::from(self.year),
            Value::from(self.ghg_total),
            Value::from(self.ghg_per_capita),
            Value::from(self.ghg_per_gdp),
            Value::from(self.data_source.clone()),
        ]
    }
}

impl SinkRow for EmissionSectoralRow {
    const TABLE: &'static str = "emission_sectoral";
    const COLUMNS: &'static [&'static str] = &[
        "substance_code",
        "sector",
        "country_code",
        "year",
        "ghg_value",
        "data_source",
    ];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.substance_code.clone()),
            Value::from(self.sector.clone()),
            Value::from(self.country_code.clone()),
            Value::from(self.year),
            Value::from(self.ghg_value),
            Value::from(self.data_source.clone()),
        ]
    }
}

impl SinkRow for LulucfCountryRow {
    const TABLE: &'static str = "lulucf_country";
    const COLUMNS: &'static [&'static str] =
        &["country_code", "year", "ghg_value", "data_source"];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.country_code.clone()),
            Value::from(self.year),
            Value::from(self.ghg_value),
            Value::from(self.data_source.clone()),
        ]
    }
}

impl SinkRow for LulucfSectoralRow {
    const TABLE: &'static str = "lulucf_sectoral";
    const COLUMNS: &'static [&'static str] = &[
        "substance_code",
        "sector",
        "country_code",
        "year",
        "ghg_value",
        "data_source",
    ];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.substance_code.clone()),
            Value::from(self.sector.clone()),
            Value::from(self.country_code.clone()),
            Value::from(self.year),
            Value::from(self.ghg_value),
            Value::from(self.data_source.clone()),
        ]
    }
}

impl SinkRow for LulucfRegionRow {
    const TABLE: &'static str = "lulucf_regions";
    const COLUMNS: &'static [&'static str] =
        &["macro_region", "year", "ghg_value", "data_source"];

    fn bind(&self) -> Vec<Value> {
        vec![
            Value::from(self.macro_region.clone()),
            Value::from(self.year),
            Value::from(self.ghg_value),
            Value::from(self.data_source.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_match_bind_arity() {
        let row = EmissionTotalRow {
            country_code: "ITA".to_string(),
            year: 2020,
            ghg_total: Some(400.0),
            ghg_per_capita: None,
            ghg_per_gdp: None,
            data_source: "EDGAR_2025".to_string(),
        };
        assert_eq!(row.bind().len(), EmissionTotalRow::COLUMNS.len());

        let row = LulucfRegionRow {
            macro_region: Some("Oceania".to_string()),
            year: 2021,
            ghg_value: Some(-3.0),
            data_source: "Calculation_2026".to_string(),
        };
        assert_eq!(row.bind().len(), LulucfRegionRow::COLUMNS.len());
    }

    #[test]
    fn test_option_binds_to_null() {
        let row = LulucfCountryRow {
            country_code: None,
            year: 2020,
            ghg_value: None,
            data_source: "EDGAR_2025".to_string(),
        };
        let params = row.bind();
        assert!(matches!(params[0], Value::Null));
        assert!(matches!(params[2], Value::Null));
    }
}
