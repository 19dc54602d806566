use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::scoring::{CreateScoringRuleRequest, ScoringRuleQuery};
use crate::services::ScoringRuleService;

// GET /admin/scoring-rules - List rules, optionally for one role
#[tracing::instrument(name = "List scoring rules", skip(pool), fields(query = %query))]
pub async fn get_scoring_rules(
    query: web::Query<ScoringRuleQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = ScoringRuleService::new(pool.get_ref().clone());
    let rules = service.list_rules(query.role).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Scoring rules retrieved", rules)))
}

// POST /admin/scoring-rules - Create a rule
#[tracing::instrument(
    name = "Create scoring rule",
    skip(request, pool),
    fields(
        stat_name = %request.stat_name,
        role = %request.role
    )
)]
pub async fn create_scoring_rule(
    request: web::Json<CreateScoringRuleRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = ScoringRuleService::new(pool.get_ref().clone());
    let rule = service.create_rule(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Scoring rule created", rule)))
}

// DELETE /admin/scoring-rules/{id} - Delete a rule
pub async fn delete_scoring_rule(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = ScoringRuleService::new(pool.get_ref().clone());
    service.delete_rule(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Scoring rule deleted")))
}
