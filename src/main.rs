// ==========================================
// EDGAR 温室气体数据管道 - 主入口
// ==========================================
// 用法: edgar-ghg-etl [工作簿路径]
// 技术栈: Rust + SQLite
// ==========================================

use edgar_ghg_etl::config::{PipelineConfig, DEFAULT_WORKBOOK_FILE};
use edgar_ghg_etl::engine::EtlOrchestrator;
use edgar_ghg_etl::extractor::ExcelWorkbook;
use edgar_ghg_etl::repository::SqliteSink;
use edgar_ghg_etl::{logging, APP_NAME, VERSION};
use tracing::{error, info, warn};

fn main() {
    // 初始化日志系统
    logging::init();

    info!("==================================================");
    info!("{APP_NAME}");
    info!("系统版本: {VERSION}");
    info!("==================================================");

    // 工作簿路径: 唯一的位置参数，缺省取当前目录下的手册文件
    let workbook_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_WORKBOOK_FILE.to_string());
    let config = PipelineConfig::new(workbook_path);

    info!(workbook = %config.workbook_path.display(), "源工作簿");
    info!(
        database = %config.database_path.display(),
        namespace = %config.namespace,
        "目标库"
    );

    // 目标库目录可能尚未创建
    if let Some(parent) = config.database_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            error!(error = %e, "目标库目录创建失败");
            std::process::exit(1);
        }
    }

    let source = match ExcelWorkbook::open(&config.workbook_path) {
        Ok(workbook) => workbook,
        Err(e) => {
            error!(error = %e, "工作簿打开失败");
            std::process::exit(1);
        }
    };

    let sink = match SqliteSink::open(&config.database_path, &config.namespace) {
        Ok(sink) => sink,
        Err(e) => {
            error!(error = %e, "目标库打开失败");
            std::process::exit(1);
        }
    };

    let mut orchestrator = EtlOrchestrator::new(source, sink);
    match orchestrator.run() {
        Ok(report) => {
            info!(report = %report.to_json(), "装载报告");
            if report.failed_tables() > 0 {
                warn!(failed = report.failed_tables(), "部分表写入失败，详见装载报告");
            }
        }
        Err(e) => {
            error!(error = %e, "入库流程中止");
            std::process::exit(1);
        }
    }
}
