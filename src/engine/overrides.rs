// ==========================================
// EDGAR 温室气体数据管道 - 人工修正配置表
// ==========================================
// 职责: 国家代码修正 / 物质代码折算的有序规则表
// 约定: 规则按声明顺序套用，同字段后者覆盖前者；
//       仅精确匹配列出的代码，未列出的代码原样透传
// ==========================================

use crate::domain::records::CountryRow;

// ==========================================
// CodeRewrite - 单列代码改写规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRewrite {
    pub from: &'static str,
    pub to: &'static str,
}

/// 事实表国家代码统一规则（全球合计行改标）
pub const COUNTRY_CODE_REWRITES: &[CodeRewrite] = &[CodeRewrite {
    from: "GLOBAL TOTAL",
    to: "GLOBAL",
}];

/// 物质代码折算规则（GWP 原始标签 → 规范代码）
pub const SUBSTANCE_CODE_ALIASES: &[CodeRewrite] = &[
    CodeRewrite {
        from: "GWP_100_AR5_CH4",
        to: "CH4",
    },
    CodeRewrite {
        from: "GWP_100_AR5_F-gases",
        to: "F-gases",
    },
    CodeRewrite {
        from: "GWP_100_AR5_N2O",
        to: "N2O",
    },
];

// ==========================================
// CountryOverride - 国家维表人工修正
// ==========================================
/// 修正效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideEffect {
    /// 改写国家代码
    RenameCode(&'static str),
    /// 填充/覆盖宏区域
    SetRegion(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOverride {
    pub code: &'static str,
    pub effect: OverrideEffect,
}

/// 国家维表人工修正表（按序套用）
///
/// 首条把全球合计行的代码改为 GLOBAL，第二条再给 GLOBAL 补宏区域，
/// 顺序不可调换。
pub const COUNTRY_OVERRIDES: &[CountryOverride] = &[
    CountryOverride {
        code: "GLOBAL TOTAL",
        effect: OverrideEffect::RenameCode("GLOBAL"),
    },
    CountryOverride {
        code: "GLOBAL",
        effect: OverrideEffect::SetRegion("GLOBAL TOTAL"),
    },
    CountryOverride {
        code: "AIR",
        effect: OverrideEffect::SetRegion("International Aviation"),
    },
    CountryOverride {
        code: "COK",
        effect: OverrideEffect::SetRegion("Oceania"),
    },
    CountryOverride {
        code: "ESH",
        effect: OverrideEffect::SetRegion("Western Sahara"),
    },
    CountryOverride {
        code: "MTQ",
        effect: OverrideEffect::SetRegion("North America"),
    },
    CountryOverride {
        code: "PYF",
        effect: OverrideEffect::SetRegion("Oceania"),
    },
    CountryOverride {
        code: "SEA",
        effect: OverrideEffect::SetRegion("International Shipping"),
    },
    CountryOverride {
        code: "TON",
        effect: OverrideEffect::SetRegion("Oceania"),
    },
    CountryOverride {
        code: "EU27",
        effect: OverrideEffect::SetRegion("EU27"),
    },
];

/// 按序套用国家维表修正
pub fn apply_country_overrides(rows: &mut [CountryRow]) {
    for rule in COUNTRY_OVERRIDES {
        for row in rows.iter_mut() {
            if row.country_code.as_deref() != Some(rule.code) {
                continue;
            }
            match rule.effect {
                OverrideEffect::RenameCode(to) => row.country_code = Some(to.to_string()),
                OverrideEffect::SetRegion(to) => row.macro_region = Some(to.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, region: Option<&str>) -> CountryRow {
        CountryRow {
            country_code: Some(code.to_string()),
            country: Some(format!("{code} name")),
            macro_region: region.map(|r| r.to_string()),
        }
    }

    #[test]
    fn test_global_total_rename_then_region() {
        let mut rows = vec![row("GLOBAL TOTAL", None)];
        apply_country_overrides(&mut rows);

        // 先改码后补区域，两条规则按序命中同一行
        assert_eq!(rows[0].country_code.as_deref(), Some("GLOBAL"));
        assert_eq!(rows[0].macro_region.as_deref(), Some("GLOBAL TOTAL"));
    }

    #[test]
    fn test_region_override_overwrites_existing() {
        let mut rows = vec![row("COK", Some("Asia"))];
        apply_country_overrides(&mut rows);
        assert_eq!(rows[0].macro_region.as_deref(), Some("Oceania"));
    }

    #[test]
    fn test_unlisted_codes_untouched() {
        let mut rows = vec![row("ITA", Some("Europe")), row("XYZ", None)];
        apply_country_overrides(&mut rows);
        assert_eq!(rows[0].macro_region.as_deref(), Some("Europe"));
        assert_eq!(rows[1].macro_region, None);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = vec![row("GLOBAL TOTAL", None), row("EU27", None), row("ITA", None)];
        apply_country_overrides(&mut once);
        let mut twice = once.clone();
        apply_country_overrides(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_substance_aliases_exact() {
        let targets: Vec<&str> = SUBSTANCE_CODE_ALIASES.iter().map(|r| r.to).collect();
        assert_eq!(targets, vec!["CH4", "F-gases", "N2O"]);
    }
}
