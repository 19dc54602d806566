use sqlx::PgPool;
use uuid::Uuid;

use crate::db::scoring_rules;
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::scoring::{CreateScoringRuleRequest, Role, ScoringRule};

/// Admin-curated scoring rule configuration
pub struct ScoringRuleService {
    pool: PgPool,
    validator: LeagueValidator,
}

impl ScoringRuleService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            validator: LeagueValidator::new(),
        }
    }

    pub async fn list_rules(&self, role: Option<Role>) -> Result<Vec<ScoringRule>, AppError> {
        let rules = match role {
            Some(role) => scoring_rules::find_scoring_rules_by_role(&self.pool, role).await?,
            None => scoring_rules::find_all_scoring_rules(&self.pool).await?,
        };
        Ok(rules)
    }

    pub async fn create_rule(&self, request: CreateScoringRuleRequest) -> Result<ScoringRule, AppError> {
        self.validator.validate_scoring_rule(&request)?;
        let rule = scoring_rules::insert_scoring_rule(
            &self.pool,
            &request.stat_name,
            request.points_per_unit,
            request.role,
        )
        .await?;
        tracing::info!(
            "Created scoring rule {}: {} x {} for {}",
            rule.id, rule.stat_name, rule.points_per_unit, rule.role
        );
        Ok(rule)
    }

    pub async fn delete_rule(&self, rule_id: Uuid) -> Result<(), AppError> {
        if !scoring_rules::delete_scoring_rule(&self.pool, rule_id).await? {
            return Err(AppError::not_found("Scoring rule not found"));
        }
        tracing::info!("Deleted scoring rule {}", rule_id);
        Ok(())
    }
}
