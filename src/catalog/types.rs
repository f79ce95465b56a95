//! Operator and tag category records.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A recruitable operator.
///
/// Identity is the `code_name`: two records with the same code name are the
/// same operator for equality, hashing, and indexing, regardless of their
/// other attributes.
///
/// # Examples
///
/// ```
/// use u_recruit::catalog::Operator;
///
/// let op = Operator::new("Texas", 5).with_tags(["近卫干员", "费用回复"]);
/// assert_eq!(op.rank, 5);
/// assert!(op.has_tag("费用回复"));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator {
    /// Unique identifier.
    pub code_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub belong: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profession: String,
    /// Rarity, 1 (lowest) to 6 (highest).
    pub rank: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sex: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub infect: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub way: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub protect: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_protect: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deploy_again: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deploy: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perfect_deploy: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub block: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_speed: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attribute: String,
    /// Recruitment tags. Order carries no meaning.
    pub tags: Vec<String>,
}

impl Operator {
    /// Creates an operator with the given identifier and rank and all other
    /// attributes empty.
    pub fn new(code_name: impl Into<String>, rank: u8) -> Self {
        Self {
            code_name: code_name.into(),
            rank,
            ..Self::default()
        }
    }

    /// Replaces the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the profession.
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    /// Sets how the operator is obtained (e.g. "公开招募").
    pub fn with_way(mut self, way: impl Into<String>) -> Self {
        self.way = way.into();
        self
    }

    /// Returns `true` if the operator bears `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Orders two operators by ascending rank.
    pub fn by_rank(a: &Operator, b: &Operator) -> Ordering {
        a.rank.cmp(&b.rank)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.code_name == other.code_name
    }
}

impl Eq for Operator {}

impl Hash for Operator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code_name.hash(state);
    }
}

/// A named group of tags (e.g. "职业" → the profession tags).
///
/// Used only as metadata for callers; the combination engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagCategory {
    #[cfg_attr(feature = "serde", serde(rename = "Cat"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "Tags"))]
    pub tags: Vec<String>,
}

impl TagCategory {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_is_code_name() {
        let a = Operator::new("Amiya", 5).with_tags(["输出"]);
        let b = Operator::new("Amiya", 3).with_tags(["治疗"]);
        let c = Operator::new("Kal'tsit", 6);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Operator> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_by_rank() {
        let low = Operator::new("Fang", 3);
        let high = Operator::new("Exusiai", 6);
        assert_eq!(Operator::by_rank(&low, &high), Ordering::Less);
        assert_eq!(Operator::by_rank(&high, &low), Ordering::Greater);
        assert_eq!(Operator::by_rank(&low, &low), Ordering::Equal);
    }

    #[test]
    fn test_has_tag() {
        let op = Operator::new("Fang", 3).with_tags(["先锋干员", "费用回复"]);
        assert!(op.has_tag("先锋干员"));
        assert!(!op.has_tag("治疗"));
    }

    #[test]
    fn test_builders() {
        let op = Operator::new("Gravel", 4)
            .with_profession("特种")
            .with_way("公开招募")
            .with_tags(["快速复活", "防护"]);
        assert_eq!(op.profession, "特种");
        assert_eq!(op.way, "公开招募");
        assert_eq!(op.tags.len(), 2);
        assert_eq!(op.health, 0);
    }

    #[test]
    fn test_category_preserves_tag_order() {
        let cat = TagCategory::new("资质", ["高级资深干员", "资深干员", "新手"]);
        assert_eq!(cat.tags, vec!["高级资深干员", "资深干员", "新手"]);
    }
}
