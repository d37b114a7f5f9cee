// ==========================================
// EDGAR 温室气体数据管道 - 引擎层
// ==========================================
// 职责: 核心变换（重塑/维表构建/事实合并/标准化/编排）
// ==========================================

// 模块声明
pub mod composer;
pub mod dimension;
pub mod error;
pub mod mapper;
pub mod orchestrator;
pub mod overrides;
pub mod reshape;

// 重导出核心类型
pub use error::{TransformError, TransformResult};
pub use orchestrator::{EtlOrchestrator, PipelineError};
pub use overrides::{
    CodeRewrite, CountryOverride, OverrideEffect, COUNTRY_CODE_REWRITES, COUNTRY_OVERRIDES,
    SUBSTANCE_CODE_ALIASES,
};
pub use reshape::{year_columns, MeltSpec};

// ==========================================
// 源工作簿标识列表头
// ==========================================
pub const COL_COUNTRY_CODE: &str = "EDGAR Country Code";
pub const COL_COUNTRY: &str = "Country";
pub const COL_SUBSTANCE: &str = "Substance";
pub const COL_SECTOR: &str = "Sector";
pub const COL_MACRO_REGION: &str = "Macro-region";

// ==========================================
// 数据来源标签
// ==========================================
// 直接来自手册的事实表
pub const DATA_SOURCE_EDGAR: &str = "EDGAR_2025";
// 宏区域口径为推算数据
pub const DATA_SOURCE_CALCULATED: &str = "Calculation_2026";
