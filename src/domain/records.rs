// ==========================================
// EDGAR 温室气体数据管道 - 落库行实体
// ==========================================
// 依据: EDGAR_2025_GHG_booklet 数据手册
// 约定: 仅管道自身保证的字段为非空（year / 合并后主键 / data_source），
//       其余字段为源数据透传，可空
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CountryRow - 国家维表
// ==========================================
// 来源: GHG_totals_by_country（代码/名称）⟕ LULUCF_countries（宏区域）
// 约定: 人工修正表按序套用后代码唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub country_code: Option<String>, // 国家代码（GLOBAL TOTAL 统一为 GLOBAL）
    pub country: Option<String>,      // 国家名称
    pub macro_region: Option<String>, // 宏区域（如 Oceania / EU27）
}

// ==========================================
// SubstanceRow - 物质维表
// ==========================================
// 固定 4 行: CO2 / CH4 / N2O / F-gases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceRow {
    pub substance_code: String, // 物质代码
    pub substance_info: String, // 物质说明
}

// ==========================================
// EmissionTotalRow - 排放总量事实
// ==========================================
// 键: (country_code, year)
// 合并: 总量 ⟕ 人均 ⟕ 单位GDP，合并后 country_code 非空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionTotalRow {
    pub country_code: String,        // 国家代码
    pub year: i32,                   // 年份（源表头解析）
    pub ghg_total: Option<f64>,      // 温室气体总量
    pub ghg_per_capita: Option<f64>, // 人均排放（早期年份可缺）
    pub ghg_per_gdp: Option<f64>,    // 单位 GDP 排放（早期年份可缺）
    pub data_source: String,         // 数据来源标签
}

// ==========================================
// EmissionSectoralRow - 分部门排放事实
// ==========================================
// 键: (substance_code, sector, country_code, year)
// 约定: GWP 原始标签已折算为规范物质代码
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSectoralRow {
    pub substance_code: Option<String>, // 物质代码（已规范化）
    pub sector: Option<String>,         // 部门
    pub country_code: Option<String>,   // 国家代码
    pub year: i32,                      // 年份
    pub ghg_value: Option<f64>,         // 排放量
    pub data_source: String,            // 数据来源标签
}

// ==========================================
// LulucfCountryRow - LULUCF 国家事实
// ==========================================
// 键: (country_code, year)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LulucfCountryRow {
    pub country_code: Option<String>, // 国家代码
    pub year: i32,                    // 年份
    pub ghg_value: Option<f64>,       // 排放量（LULUCF 可为负）
    pub data_source: String,          // 数据来源标签
}

// ==========================================
// LulucfSectoralRow - LULUCF 分部门事实
// ==========================================
// 键: (substance_code, sector, country_code, year)
// 约定: 物质代码折算规则与 EmissionSectoral 相同
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LulucfSectoralRow {
    pub substance_code: Option<String>, // 物质代码（已规范化）
    pub sector: Option<String>,         // 部门
    pub country_code: Option<String>,   // 国家代码
    pub year: i32,                      // 年份
    pub ghg_value: Option<f64>,         // 排放量
    pub data_source: String,            // 数据来源标签
}

// ==========================================
// LulucfRegionRow - LULUCF 宏区域事实
// ==========================================
// 键: (macro_region, year)
// 约定: data_source 为推算口径标签，区别于其余各表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LulucfRegionRow {
    pub macro_region: Option<String>, // 宏区域
    pub year: i32,                    // 年份
    pub ghg_value: Option<f64>,       // 排放量
    pub data_source: String,          // 数据来源标签（推算口径）
}
