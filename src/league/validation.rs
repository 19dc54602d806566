use crate::error::AppError;
use crate::models::scoring::CreateScoringRuleRequest;
use crate::scoring::stat_key::StatKey;

const MAX_NAME_LENGTH: usize = 255;

/// Centralized validation for league requests
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a display name (league, player or match). `kind` names the
    /// entity in error messages.
    pub fn validate_name(&self, kind: &str, name: &str) -> Result<(), AppError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(AppError::validation(format!("{} name cannot be empty", kind)));
        }

        if trimmed_name.len() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "{} name too long (maximum {} characters)",
                kind, MAX_NAME_LENGTH
            )));
        }

        if trimmed_name.contains('\0') {
            return Err(AppError::validation(format!("{} name contains invalid characters", kind)));
        }

        // Ensure name has actual content (not just whitespace/special chars)
        if !trimmed_name.chars().any(|c| c.is_alphanumeric()) {
            return Err(AppError::validation(format!(
                "{} name must contain alphanumeric characters",
                kind
            )));
        }

        Ok(())
    }

    /// Only recognized statistics with a finite weight can be stored as rules.
    pub fn validate_scoring_rule(&self, request: &CreateScoringRuleRequest) -> Result<(), AppError> {
        if request.stat_name.parse::<StatKey>().is_err() {
            let known: Vec<&str> = StatKey::ALL.iter().map(|k| k.as_str()).collect();
            return Err(AppError::validation(format!(
                "Unknown statistic '{}'. Expected one of: {}",
                request.stat_name,
                known.join(", ")
            )));
        }

        if !request.points_per_unit.is_finite() {
            return Err(AppError::validation("Points per unit must be a finite number"));
        }

        Ok(())
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
