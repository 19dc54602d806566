use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod league;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // League routes (require authentication)
    cfg.service(
        web::scope("/league")
            .wrap(AuthMiddleware)
            .service(league::join_league)
            .service(league::create_league)
            .service(league::get_league)
            .service(league::get_league_standings)
            .service(league::create_player)
            .service(league::get_league_players)
            .service(league::create_match)
            .service(league::get_league_matches)
            .service(league::get_my_roster)
            .service(league::assign_roster_player)
            .service(league::remove_roster_player)
            .service(league::update_player_match_stats)
            .service(league::get_match_stats)
    );

    admin::init_admin_routes(cfg);
}
