//! JSON catalog loading.
//!
//! Operator records use the snake_case keys of the game data dump
//! (`code_name`, `magic_protect`, ...). Category records are objects of the
//! form `{"Cat": "<name>", "Tags": ["<tag>", ...]}`. An operator record must
//! carry `code_name`, `rank` and `tags`; the descriptive attributes take
//! their default value when absent.

use super::index::CatalogIndex;
use super::types::{Operator, TagCategory};
use crate::error::Result;

/// Parses an array of operator records.
pub fn parse_operators(json: &str) -> Result<Vec<Operator>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses an array of tag category records.
pub fn parse_categories(json: &str) -> Result<Vec<TagCategory>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses both inputs and builds the index.
///
/// # Examples
///
/// ```
/// use u_recruit::catalog::load::from_json;
///
/// let operators = r#"[
///     {"code_name": "Fang", "rank": 3, "tags": ["先锋干员", "费用回复"]},
///     {"code_name": "Castle-3", "rank": 1, "tags": ["支援机械"]}
/// ]"#;
/// let categories = r#"[{"Cat": "职业", "Tags": ["先锋干员"]}]"#;
///
/// let index = from_json(operators, categories, |op| op.rank > 1).unwrap();
/// assert_eq!(index.operators().len(), 1);
/// assert_eq!(index.tag_categories()["职业"], vec!["先锋干员"]);
/// ```
pub fn from_json<F>(operators: &str, categories: &str, include_if: F) -> Result<CatalogIndex>
where
    F: Fn(&Operator) -> bool,
{
    let operators = parse_operators(operators)?;
    let categories = parse_categories(categories)?;
    Ok(CatalogIndex::new(operators, categories, include_if))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecruitError;

    const OPERATORS: &str = r#"[
        {
            "code_name": "Texas",
            "belong": "企鹅物流",
            "profession": "先锋",
            "rank": 5,
            "sex": "女",
            "infect": false,
            "way": "公开招募",
            "health": 1950,
            "attack": 500,
            "protect": 343,
            "magic_protect": 0,
            "deploy_again": "慢",
            "deploy": 11,
            "perfect_deploy": 13,
            "block": 1,
            "attack_speed": "中",
            "attribute": "近战",
            "tags": ["近战位", "费用回复", "控场"]
        },
        {"code_name": "Lancet-2", "rank": 1, "tags": ["支援机械", "治疗"]}
    ]"#;

    const CATEGORIES: &str = r#"[
        {"Cat": "位置", "Tags": ["近战位", "远程位"]},
        {"Cat": "资质", "Tags": ["高级资深干员", "资深干员", "新手", "支援机械"]}
    ]"#;

    #[test]
    fn test_parse_full_record() {
        let ops = parse_operators(OPERATORS).unwrap();
        assert_eq!(ops.len(), 2);
        let texas = &ops[0];
        assert_eq!(texas.code_name, "Texas");
        assert_eq!(texas.rank, 5);
        assert_eq!(texas.magic_protect, 0);
        assert_eq!(texas.perfect_deploy, 13);
        assert_eq!(texas.attack_speed, "中");
        assert_eq!(texas.tags, vec!["近战位", "费用回复", "控场"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let ops = parse_operators(OPERATORS).unwrap();
        let lancet = &ops[1];
        assert_eq!(lancet.health, 0);
        assert!(lancet.belong.is_empty());
        assert!(!lancet.infect);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let err = from_json(r#"[{"rank": 3, "tags": ["x"]}]"#, "[]", |_| true).unwrap_err();
        assert!(matches!(err, RecruitError::Json(_)));

        let err = parse_operators(r#"[{"code_name": "Z", "tags": ["x"]}]"#).unwrap_err();
        assert!(matches!(err, RecruitError::Json(_)));

        let err = parse_operators(r#"[{"code_name": "Z", "rank": 4}]"#).unwrap_err();
        assert!(matches!(err, RecruitError::Json(_)));
    }

    #[test]
    fn test_from_json_applies_filter() {
        let index = from_json(OPERATORS, CATEGORIES, |op| op.way == "公开招募").unwrap();
        assert_eq!(index.operators().len(), 1);
        assert!(!index.contains_tag("支援机械"));
        assert_eq!(index.tag_categories().len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let err = from_json("[{", CATEGORIES, |_| true).unwrap_err();
        assert!(matches!(err, RecruitError::Json(_)));

        let err = parse_categories(r#"[{"Cat": "位置"}]"#).unwrap_err();
        assert!(matches!(err, RecruitError::Json(_)));
    }
}
