//! Single binary web server: bracket page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set FIXTURES to a CSV of tournaments and teams to serve (see `store::load_fixtures`).

use actix_files::Files;
use actix_web::{
    delete, get,
    http::header,
    post,
    web::{self, Data, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use esports_bracket_web::{
    load_fixture_file, Bracket, BracketError, BracketService, InMemoryStore, ServerConfig,
    TournamentId,
};
use serde::{Deserialize, Serialize};

type AppState = Data<BracketService<InMemoryStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Bracket plus the champion, once the final has been played.
#[derive(Serialize)]
struct BracketResponse<'a> {
    #[serde(flatten)]
    bracket: &'a Bracket,
    champion: Option<&'a str>,
}

impl<'a> From<&'a Bracket> for BracketResponse<'a> {
    fn from(bracket: &'a Bracket) -> Self {
        Self {
            bracket,
            champion: bracket.champion(),
        }
    }
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id, round and match number (both 1-based)
#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    round: u32,
    match_num: u32,
}

#[derive(Deserialize)]
struct CsvQuery {
    #[serde(default)]
    results: bool,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn internal_error(e: BracketError) -> HttpResponse {
    log::error!("Bracket request failed: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Internal error" }))
}

fn bracket_response(result: Result<Option<Bracket>, BracketError>) -> HttpResponse {
    match result {
        Ok(Some(bracket)) => HttpResponse::Ok().json(BracketResponse::from(&bracket)),
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "esports-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    match state.tournaments() {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => internal_error(e),
    }
}

/// Unscored bracket, freshly seeded (404 if the tournament does not exist).
#[get("/api/tournaments/{id}/bracket")]
async fn api_get_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    bracket_response(state.get_bracket(path.id, &mut rand::thread_rng()))
}

/// Fully simulated bracket, freshly seeded.
#[get("/api/tournaments/{id}/bracket/results")]
async fn api_get_bracket_results(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    bracket_response(state.get_bracket_with_results(path.id, &mut rand::thread_rng()))
}

/// Bracket as CSV, one row per match. `?results=true` simulates every match first.
#[get("/api/tournaments/{id}/bracket.csv")]
async fn api_bracket_csv(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<CsvQuery>,
) -> HttpResponse {
    let mut rng = rand::thread_rng();
    let result = if query.results {
        state.get_bracket_with_results(path.id, &mut rng)
    } else {
        state.get_bracket(path.id, &mut rng)
    };
    let bracket = match result {
        Ok(Some(b)) => b,
        Ok(None) => return not_found(),
        Err(e) => return internal_error(e),
    };
    let mut body = Vec::new();
    match bracket.write_csv(&mut body) {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => internal_error(e),
    }
}

/// Live bracket: persisted seeding with the results simulated so far.
#[get("/api/tournaments/{id}/bracket/live")]
async fn api_get_live_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    bracket_response(state.live_bracket(path.id, &mut rand::thread_rng()))
}

/// Discard the live bracket so the next request seeds a new one.
#[delete("/api/tournaments/{id}/bracket/live")]
async fn api_reset_live_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.reset_live_bracket(path.id) {
        Ok(removed) => HttpResponse::Ok().json(serde_json::json!({ "removed": removed })),
        Err(e) => internal_error(e),
    }
}

/// Simulate one match of the live bracket. Redirects to the unscored bracket
/// when the match cannot be played.
#[post("/api/tournaments/{id}/bracket/matches/{round}/{match_num}/simulate")]
async fn api_simulate_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let result = state.simulate_match(path.id, path.round, path.match_num, &mut rand::thread_rng());
    match result {
        Ok(Some(bracket)) => HttpResponse::Ok().json(BracketResponse::from(&bracket)),
        Ok(None) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/api/tournaments/{}/bracket", path.id)))
            .finish(),
        Err(e) => internal_error(e),
    }
}

fn load_store(config: &ServerConfig) -> std::io::Result<InMemoryStore> {
    let Some(path) = &config.fixtures else {
        log::warn!("FIXTURES not set; starting with no tournaments");
        return Ok(InMemoryStore::new());
    };
    let store = load_fixture_file(path).map_err(|e| {
        log::error!("Could not load fixtures from {}: {}", path.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    log::info!("Loaded fixtures from {}", path.display());
    Ok(store)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let store = load_store(&config)?;
    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(BracketService::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_tournaments)
            .service(api_get_bracket)
            .service(api_get_bracket_results)
            .service(api_bracket_csv)
            .service(api_get_live_bracket)
            .service(api_reset_live_bracket)
            .service(api_simulate_match)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
