use crate::models::scoring::{Role, ScoringRule};

/// In-memory view of the scoring rules loaded for one computation
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<ScoringRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    /// Rules that apply to `role`. Empty when none are configured.
    pub fn rules_for_role(&self, role: Role) -> impl Iterator<Item = &ScoringRule> {
        self.rules.iter().filter(move |rule| rule.role == role)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<ScoringRule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = ScoringRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
