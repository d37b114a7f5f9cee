// ==========================================
// EDGAR 温室气体数据管道 - 领域层
// ==========================================
// 职责: 内存表格结构、落库行实体、装载报告
// ==========================================

// 模块声明
pub mod records;
pub mod report;
pub mod table;

// 重导出核心类型
pub use records::{
    CountryRow, EmissionSectoralRow, EmissionTotalRow, LulucfCountryRow, LulucfRegionRow,
    LulucfSectoralRow, SubstanceRow,
};
pub use report::{LoadOutcome, LoadReport, LoadStatus};
pub use table::{CellValue, DataTable};
