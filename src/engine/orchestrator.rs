// ==========================================
// EDGAR 温室气体数据管道 - 流程编排
// ==========================================
// 流程: 抽取 → 重塑 → 合并/标准化 → 映射 → 落库
// 约定: 严格串行；抽取/变换失败中止整次运行；
//       单表写入失败记录后继续下一张表
// ==========================================

use crate::domain::report::{LoadOutcome, LoadReport};
use crate::engine::composer::{drop_where_null, left_join, rewrite_column, set_literal_column};
use crate::engine::dimension::{build_country_dimension, substance_rows};
use crate::engine::error::TransformError;
use crate::engine::mapper::{
    to_emission_sectoral_rows, to_emission_total_rows, to_lulucf_country_rows,
    to_lulucf_region_rows, to_lulucf_sectoral_rows,
};
use crate::engine::overrides::{COUNTRY_CODE_REWRITES, SUBSTANCE_CODE_ALIASES};
use crate::engine::reshape::{melt_years, MeltSpec};
use crate::engine::{
    COL_COUNTRY, COL_COUNTRY_CODE, COL_MACRO_REGION, COL_SECTOR, COL_SUBSTANCE,
    DATA_SOURCE_CALCULATED, DATA_SOURCE_EDGAR,
};
use crate::extractor::error::ExtractError;
use crate::extractor::workbook::SheetSource;
use crate::extractor::{
    SHEET_GHG_BY_SECTOR, SHEET_GHG_PER_CAPITA, SHEET_GHG_PER_GDP, SHEET_GHG_TOTALS,
    SHEET_LULUCF_COUNTRIES, SHEET_LULUCF_MACROREGIONS, SHEET_LULUCF_SECTORAL,
};
use crate::repository::sink::{RelationalSink, SinkRow};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

/// 管道致命错误（仅抽取与变换两类会中止运行）
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// 排放总量合并键（国家代码 + 国家名 + 年份）
const TOTALS_JOIN_KEY: &[&str] = &["country_code", "country", "year"];

// ==========================================
// EtlOrchestrator - 管道编排器
// ==========================================
pub struct EtlOrchestrator<S, K>
where
    S: SheetSource,
    K: RelationalSink,
{
    source: S,
    sink: K,
}

impl<S, K> EtlOrchestrator<S, K>
where
    S: SheetSource,
    K: RelationalSink,
{
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// 执行完整入库流程
    ///
    /// # 返回
    /// - Ok(LoadReport): 逐表装载结果（含失败表）
    /// - Err(PipelineError): 抽取/变换失败，整次运行中止
    pub fn run(&mut self) -> Result<LoadReport, PipelineError> {
        let start = Instant::now();
        let mut report = LoadReport::begin();

        let sheets = self.source.list_sheets();
        info!(run_id = %report.run_id, sheets = sheets.len(), "工作簿打开完成");
        debug!(?sheets, "工作表清单");

        // === 步骤 1: 国家维表 ===
        debug!("步骤 1: 国家维表");
        let totals_wide = self.source.read_sheet(SHEET_GHG_TOTALS)?;
        let lulucf_wide = self.source.read_sheet(SHEET_LULUCF_COUNTRIES)?;
        let countries = build_country_dimension(&totals_wide, &lulucf_wide)?;
        self.load_table(&countries, &mut report);

        // === 步骤 2: 物质维表 ===
        debug!("步骤 2: 物质维表");
        let substances = substance_rows();
        self.load_table(&substances, &mut report);

        // === 步骤 3: 排放总量（总量 ⟕ 人均 ⟕ 单位GDP）===
        debug!("步骤 3: 排放总量");
        let per_capita_wide = self.source.read_sheet(SHEET_GHG_PER_CAPITA)?;
        let per_gdp_wide = self.source.read_sheet(SHEET_GHG_PER_GDP)?;

        let country_ids: &[(&str, &str)] = &[
            (COL_COUNTRY_CODE, "country_code"),
            (COL_COUNTRY, "country"),
        ];
        let totals_long = melt_years(
            &totals_wide,
            &MeltSpec {
                id_columns: country_ids,
                value_name: "ghg_total",
            },
        )?;
        let per_capita_long = melt_years(
            &per_capita_wide,
            &MeltSpec {
                id_columns: country_ids,
                value_name: "ghg_per_capita",
            },
        )?;
        let per_gdp_long = melt_years(
            &per_gdp_wide,
            &MeltSpec {
                id_columns: country_ids,
                value_name: "ghg_per_gdp",
            },
        )?;

        let mut fact = left_join(&totals_long, &per_capita_long, TOTALS_JOIN_KEY)?;
        drop_where_null(&mut fact, "country_code")?;
        let mut fact = left_join(&fact, &per_gdp_long, TOTALS_JOIN_KEY)?;
        drop_where_null(&mut fact, "country_code")?;
        set_literal_column(&mut fact, "data_source", DATA_SOURCE_EDGAR);
        rewrite_column(&mut fact, "country_code", COUNTRY_CODE_REWRITES)?;

        let emission_totals = to_emission_total_rows(&fact)?;
        self.load_table(&emission_totals, &mut report);

        // === 步骤 4: 分部门排放 ===
        debug!("步骤 4: 分部门排放");
        let sector_wide = self.source.read_sheet(SHEET_GHG_BY_SECTOR)?;
        let mut sector_long = melt_years(
            &sector_wide,
            &MeltSpec {
                id_columns: &[
                    (COL_SUBSTANCE, "substance_code"),
                    (COL_SECTOR, "sector"),
                    (COL_COUNTRY_CODE, "country_code"),
                    (COL_COUNTRY, "country"),
                ],
                value_name: "ghg_value",
            },
        )?;
        set_literal_column(&mut sector_long, "data_source", DATA_SOURCE_EDGAR);
        rewrite_column(&mut sector_long, "country_code", COUNTRY_CODE_REWRITES)?;
        rewrite_column(&mut sector_long, "substance_code", SUBSTANCE_CODE_ALIASES)?;

        let emission_sectoral = to_emission_sectoral_rows(&sector_long)?;
        self.load_table(&emission_sectoral, &mut report);

        // === 步骤 5: LULUCF 国家 ===
        debug!("步骤 5: LULUCF 国家");
        let mut lulucf_country_long = melt_years(
            &lulucf_wide,
            &MeltSpec {
                id_columns: &[
                    (COL_SUBSTANCE, "substance_code"),
                    (COL_COUNTRY_CODE, "country_code"),
                    (COL_COUNTRY, "country"),
                ],
                value_name: "ghg_value",
            },
        )?;
        set_literal_column(&mut lulucf_country_long, "data_source", DATA_SOURCE_EDGAR);

        let lulucf_country = to_lulucf_country_rows(&lulucf_country_long)?;
        self.load_table(&lulucf_country, &mut report);

        // === 步骤 6: LULUCF 分部门 ===
        debug!("步骤 6: LULUCF 分部门");
        let lulucf_sectoral_wide = self.source.read_sheet(SHEET_LULUCF_SECTORAL)?;
        let mut lulucf_sectoral_long = melt_years(
            &lulucf_sectoral_wide,
            &MeltSpec {
                id_columns: &[
                    (COL_SUBSTANCE, "substance_code"),
                    (COL_SECTOR, "sector"),
                    (COL_COUNTRY_CODE, "country_code"),
                    (COL_COUNTRY, "country"),
                ],
                value_name: "ghg_value",
            },
        )?;
        set_literal_column(&mut lulucf_sectoral_long, "data_source", DATA_SOURCE_EDGAR);
        rewrite_column(
            &mut lulucf_sectoral_long,
            "substance_code",
            SUBSTANCE_CODE_ALIASES,
        )?;

        let lulucf_sectoral = to_lulucf_sectoral_rows(&lulucf_sectoral_long)?;
        self.load_table(&lulucf_sectoral, &mut report);

        // === 步骤 7: LULUCF 宏区域 ===
        debug!("步骤 7: LULUCF 宏区域");
        let region_wide = self.source.read_sheet(SHEET_LULUCF_MACROREGIONS)?;
        let mut region_long = melt_years(
            &region_wide,
            &MeltSpec {
                id_columns: &[(COL_MACRO_REGION, "macro_region")],
                value_name: "ghg_value",
            },
        )?;
        set_literal_column(&mut region_long, "data_source", DATA_SOURCE_CALCULATED);

        let lulucf_regions = to_lulucf_region_rows(&region_long)?;
        self.load_table(&lulucf_regions, &mut report);

        report.finish(start.elapsed());
        info!(
            run_id = %report.run_id,
            loaded = report.loaded_tables(),
            failed = report.failed_tables(),
            rows = report.total_rows(),
            elapsed_ms = report.elapsed_ms,
            "入库流程完成"
        );

        Ok(report)
    }

    /// 单表装载（失败记录后继续，不上抛）
    fn load_table<R: SinkRow>(&self, rows: &[R], report: &mut LoadReport) {
        info!(table = R::TABLE, rows = rows.len(), "开始写入");
        let start = Instant::now();

        match self.sink.append(rows) {
            Ok(count) => {
                info!(table = R::TABLE, rows = count, "写入成功");
                report.record(LoadOutcome::loaded(R::TABLE, count, start.elapsed()));
            }
            Err(e) => {
                error!(table = R::TABLE, error = %e, "写入失败，跳过该表继续");
                report.record(LoadOutcome::failed(
                    R::TABLE,
                    rows.len(),
                    e.to_string(),
                    start.elapsed(),
                ));
            }
        }
    }
}
