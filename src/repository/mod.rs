// ==========================================
// EDGAR 温室气体数据管道 - 仓储层
// ==========================================
// 职责: 落库行的追加写入（逐表事务，失败不跨表传播）
// ==========================================

// 模块声明
pub mod error;
pub mod sink;
pub mod sqlite_sink;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use sink::{RelationalSink, SinkRow};
pub use sqlite_sink::SqliteSink;
