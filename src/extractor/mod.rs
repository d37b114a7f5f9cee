// ==========================================
// EDGAR 温室气体数据管道 - 抽取层
// ==========================================
// 职责: 按名读取工作簿工作表，产出内存宽表
// 支持: Excel (.xlsx/.xls)
// ==========================================

// 模块声明
pub mod error;
pub mod workbook;

// 重导出核心类型
pub use error::{ExtractError, ExtractResult};
pub use workbook::{ExcelWorkbook, SheetSource};

// ==========================================
// 源工作簿约定的工作表名
// ==========================================
pub const SHEET_GHG_TOTALS: &str = "GHG_totals_by_country";
pub const SHEET_GHG_PER_CAPITA: &str = "GHG_per_capita_by_country";
pub const SHEET_GHG_PER_GDP: &str = "GHG_per_GDP_by_country";
pub const SHEET_GHG_BY_SECTOR: &str = "GHG_by_sector_and_country";
pub const SHEET_LULUCF_COUNTRIES: &str = "LULUCF_countries";
pub const SHEET_LULUCF_SECTORAL: &str = "LULUCF_sectoral";
pub const SHEET_LULUCF_MACROREGIONS: &str = "LULUCF_macroregions";
