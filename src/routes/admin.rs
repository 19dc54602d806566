use actix_web::web;

use crate::handlers::admin::scoring_rule_handler;
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            .service(
                web::resource("/scoring-rules")
                    .route(web::get().to(scoring_rule_handler::get_scoring_rules))
                    .route(web::post().to(scoring_rule_handler::create_scoring_rule))
            )
            .service(
                web::resource("/scoring-rules/{id}")
                    .route(web::delete().to(scoring_rule_handler::delete_scoring_rule))
            )
    );
}
