// ==========================================
// EDGAR 温室气体数据管道 - 装载报告
// ==========================================
// 职责: 逐表装载结果的收集（跳过并继续契约的数据化）
// 约定: 单表失败只记录，不中断后续表
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// 单表装载状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// 写入成功
    Loaded,
    /// 写入失败（记录底层原因）
    Failed { message: String },
}

// ==========================================
// LoadOutcome - 单表装载结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOutcome {
    pub table: String,      // 目标表名
    pub rows: usize,        // 待写入行数
    pub status: LoadStatus, // 装载状态
    pub elapsed_ms: u64,    // 写入耗时（毫秒）
}

impl LoadOutcome {
    pub fn loaded(table: &str, rows: usize, elapsed: Duration) -> Self {
        Self {
            table: table.to_string(),
            rows,
            status: LoadStatus::Loaded,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn failed(table: &str, rows: usize, message: String, elapsed: Duration) -> Self {
        Self {
            table: table.to_string(),
            rows,
            status: LoadStatus::Failed { message },
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }
}

// ==========================================
// LoadReport - 单次运行装载报告
// ==========================================
// 生命周期: 一次管道运行独占一份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub run_id: String,               // 运行批次 ID
    pub started_at: DateTime<Utc>,    // 运行开始时间
    pub outcomes: Vec<LoadOutcome>,   // 逐表结果（按装载顺序）
    pub elapsed_ms: u64,              // 全程耗时（毫秒）
}

impl LoadReport {
    pub fn begin() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            outcomes: Vec::new(),
            elapsed_ms: 0,
        }
    }

    pub fn record(&mut self, outcome: LoadOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// 成功写入的表数
    pub fn loaded_tables(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_loaded()).count()
    }

    /// 写入失败的表数
    pub fn failed_tables(&self) -> usize {
        self.outcomes.len() - self.loaded_tables()
    }

    /// 成功写入的总行数
    pub fn total_rows(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.is_loaded())
            .map(|o| o.rows)
            .sum()
    }

    /// 按表名查找结果
    pub fn outcome(&self, table: &str) -> Option<&LoadOutcome> {
        self.outcomes.iter().find(|o| o.table == table)
    }

    /// 渲染为 JSON（用于运行末尾的结构化输出）
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
