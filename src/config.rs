// ==========================================
// EDGAR 温室气体数据管道 - 配置层
// ==========================================
// 职责: 工作簿/目标库路径与命名空间
// 约定: 核心管道不读命令行开关与环境变量，
//       路径解析只发生在二进制入口
// ==========================================

use std::path::PathBuf;

/// 固定落库命名空间
pub const SINK_NAMESPACE: &str = "edgar_data";

/// 默认工作簿文件名（当前目录）
pub const DEFAULT_WORKBOOK_FILE: &str = "EDGAR_2025_GHG_booklet_2025.xlsx";

/// 管道运行配置
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// 源工作簿路径
    pub workbook_path: PathBuf,
    /// 目标库文件路径
    pub database_path: PathBuf,
    /// 落库命名空间
    pub namespace: String,
}

impl PipelineConfig {
    pub fn new<P: Into<PathBuf>>(workbook_path: P) -> Self {
        Self {
            workbook_path: workbook_path.into(),
            database_path: default_database_path(),
            namespace: SINK_NAMESPACE.to_string(),
        }
    }

    pub fn with_database<P: Into<PathBuf>>(mut self, database_path: P) -> Self {
        self.database_path = database_path.into();
        self
    }
}

/// 默认目标库位置（平台数据目录，取不到时退回当前目录）
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("edgar-ghg-etl"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("edgar_data.db")
}
