// ==========================================
// EDGAR 温室气体数据管道 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 变换错误（列缺失/类型不符）是结构性问题，直接上抛
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("标识列不存在: {column}（可用列: [{available}]）")]
    ColumnNotFound { column: String, available: String },

    #[error("类型不匹配 (列 {column}, 行 {row}): {message}")]
    TypeMismatch {
        column: String,
        row: usize,
        message: String,
    },
}

impl TransformError {
    /// 构造列缺失错误（附带可用列清单便于排查）
    pub fn column_not_found(column: &str, columns: &[String]) -> Self {
        TransformError::ColumnNotFound {
            column: column.to_string(),
            available: columns.join(", "),
        }
    }
}

/// Result 类型别名
pub type TransformResult<T> = Result<T, TransformError>;
