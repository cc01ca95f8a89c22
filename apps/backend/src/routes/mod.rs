use actix_web::web;

pub mod game_sessions;
pub mod health;
pub mod parse_file;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: / and /health
    cfg.configure(health::configure_routes);

    // Sessions: /api/game-sessions/**
    cfg.service(web::scope("/api/game-sessions").configure(game_sessions::configure_routes));

    // Upload: /api/parse-file
    cfg.service(web::scope("/api").configure(parse_file::configure_routes));
}
