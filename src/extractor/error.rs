// ==========================================
// EDGAR 温室气体数据管道 - 抽取层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 抽取失败对依赖该表的产出是致命的，直接上抛
// ==========================================

use thiserror::Error;

/// 抽取层错误类型
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls）")]
    UnsupportedFormat(String),

    #[error("工作簿打开失败 ({path}): {message}")]
    WorkbookOpen { path: String, message: String },

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("工作表读取失败 ({sheet}): {message}")]
    SheetRead { sheet: String, message: String },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::WorkbookOpen {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ExtractResult<T> = Result<T, ExtractError>;
