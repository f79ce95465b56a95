//! Recruitment query configuration.

/// The tag that makes top-rank operators recruitable through tag matching.
pub const SENIOR_OPERATOR_TAG: &str = "高级资深干员";

/// Configuration for a [`CombinationEngine`](super::CombinationEngine).
///
/// # Defaults
///
/// ```
/// use u_recruit::combination::{RecruitConfig, SENIOR_OPERATOR_TAG};
///
/// let config = RecruitConfig::default();
/// assert_eq!(config.senior_tag, SENIOR_OPERATOR_TAG);
/// assert_eq!(config.top_rank, 6);
/// assert_eq!(config.max_query_tags, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_recruit::combination::RecruitConfig;
///
/// let config = RecruitConfig::default()
///     .with_senior_tag("Top Operator")
///     .with_max_query_tags(8)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RecruitConfig {
    /// Marker tag required for a top-rank result to be reported.
    pub senior_tag: String,

    /// Rank the exclusion rule applies to.
    pub top_rank: u8,

    /// Largest tag set a single query may enumerate.
    ///
    /// Enumeration visits 2^n subsets, so this bounds the work per query.
    pub max_query_tags: usize,

    /// Whether batch queries run on the rayon pool.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for RecruitConfig {
    fn default() -> Self {
        Self {
            senior_tag: SENIOR_OPERATOR_TAG.to_string(),
            top_rank: 6,
            max_query_tags: 20,
            parallel: true,
        }
    }
}

impl RecruitConfig {
    /// Sets the marker tag.
    pub fn with_senior_tag(mut self, tag: impl Into<String>) -> Self {
        self.senior_tag = tag.into();
        self
    }

    /// Sets the rank subject to the exclusion rule.
    pub fn with_top_rank(mut self, rank: u8) -> Self {
        self.top_rank = rank;
        self
    }

    /// Sets the maximum query size.
    pub fn with_max_query_tags(mut self, n: usize) -> Self {
        self.max_query_tags = n;
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.senior_tag.is_empty() {
            return Err("senior_tag must not be empty".into());
        }
        if self.top_rank == 0 {
            return Err("top_rank must be at least 1".into());
        }
        if self.max_query_tags == 0 {
            return Err("max_query_tags must be at least 1".into());
        }
        if self.max_query_tags > 63 {
            return Err("max_query_tags must be at most 63".into());
        }
        Ok(())
    }
}
