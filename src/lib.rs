// ==========================================
// EDGAR 温室气体数据管道 - 核心库
// ==========================================
// 数据源: EDGAR_2025_GHG_booklet（多工作表宽表）
// 技术栈: Rust + SQLite
// 系统定位: 单向入库管道（宽表 → 规范化关系模型）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表格结构与落库行
pub mod domain;

// 抽取层 - 工作簿读取
pub mod extractor;

// 引擎层 - 重塑/合并/标准化
pub mod engine;

// 数据仓储层 - 关系库写入
pub mod repository;

// 配置层 - 路径与命名空间
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CellValue, CountryRow, DataTable, EmissionSectoralRow, EmissionTotalRow, LoadOutcome,
    LoadReport, LoadStatus, LulucfCountryRow, LulucfRegionRow, LulucfSectoralRow, SubstanceRow,
};

// 抽取层
pub use extractor::{ExcelWorkbook, ExtractError, SheetSource};

// 引擎
pub use engine::{EtlOrchestrator, MeltSpec, PipelineError, TransformError};

// 仓储层
pub use repository::{RelationalSink, RepositoryError, SinkRow, SqliteSink};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "EDGAR 温室气体数据管道";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
