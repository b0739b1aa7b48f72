//! Saga viewer server: reloads the league snapshot on an interval and serves the
//! broadcast display model, standings, court board and standings report.
//! Run with: cargo run --bin saga-viewer
//! Configured from the environment (see `saga_standings::config`).

use actix_web::{
    get, put,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use saga_standings::{
    below_threshold, build_viewer_snapshot, compute_standings, current_day, classify,
    load_store_payload, parse_store_payload, save_store_payload, write_standings_report,
    MatchBoard, ServerConfig, StorePayload, ViewerSnapshot,
};
use serde::Serialize;
use std::path::Path;
use std::sync::RwLock;

/// Last good snapshot plus fetch status.
#[derive(Default)]
struct ViewerState {
    payload: Option<StorePayload>,
    last_updated: Option<DateTime<Utc>>,
    /// False after a failed reload, until the next good one.
    is_online: bool,
}

type AppState = Data<RwLock<ViewerState>>;

/// Upload limit for `PUT /api/league`.
const MAX_SNAPSHOT_BYTES: usize = 8 * 1024 * 1024;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewerResponse {
    #[serde(flatten)]
    snapshot: ViewerSnapshot,
    last_updated: Option<DateTime<Utc>>,
    is_online: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchesResponse {
    day_index: Option<usize>,
    is_day_complete: bool,
    #[serde(flatten)]
    board: MatchBoard,
}

fn no_data() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(serde_json::json!({ "error": "No league data yet" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "saga-viewer",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full broadcast display model, recomputed from the current snapshot.
#[get("/api/viewer")]
async fn api_viewer(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match &g.payload {
        Some(payload) => HttpResponse::Ok().json(ViewerResponse {
            snapshot: build_viewer_snapshot(payload),
            last_updated: g.last_updated,
            is_online: g.is_online,
        }),
        None => no_data(),
    }
}

/// Raw ranked table (player ids, no display names).
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match &g.payload {
        Some(payload) => HttpResponse::Ok().json(compute_standings(&payload.league())),
        None => no_data(),
    }
}

/// Live / queued matches of the current day.
#[get("/api/matches")]
async fn api_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(payload) = &g.payload else {
        return no_data();
    };
    let league = payload.league();
    let response = match current_day(&league) {
        Some(today) => MatchesResponse {
            day_index: Some(today.index),
            is_day_complete: today.is_complete,
            board: classify(today.day),
        },
        None => MatchesResponse {
            day_index: None,
            is_day_complete: false,
            board: MatchBoard::default(),
        },
    };
    HttpResponse::Ok().json(response)
}

/// Standings report as CSV.
#[get("/api/report.csv")]
async fn api_report_csv(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(payload) = &g.payload else {
        return no_data();
    };
    let snapshot = build_viewer_snapshot(payload);
    let mut body = Vec::new();
    match write_standings_report(&mut body, &snapshot) {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"saga_standings.csv\""))
            .body(body),
        Err(e) => {
            log::error!("Report export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Players below the 60% participation rule.
#[get("/api/report/participation")]
async fn api_participation(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match &g.payload {
        Some(payload) => HttpResponse::Ok().json(below_threshold(&build_viewer_snapshot(payload))),
        None => no_data(),
    }
}

/// Replace the league snapshot (read-write instances only). Persists to the data file.
#[put("/api/league")]
async fn api_put_league(state: AppState, config: Data<ServerConfig>, body: String) -> HttpResponse {
    if !config.access.allows_writes() {
        log::warn!("Write blocked: viewer instance is read-only");
        return HttpResponse::Forbidden().json(serde_json::json!({ "error": "Write blocked: read-only viewer" }));
    }
    let payload = match parse_store_payload(&body) {
        Ok(Some(p)) => p,
        Ok(None) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Empty snapshot" }))
        }
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    if let Err(e) = save_store_payload(&config.data_file, &payload).await {
        log::error!("Saving snapshot to {} failed: {}", config.data_file.display(), e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.payload = Some(payload);
    g.last_updated = Some(Utc::now());
    g.is_online = true;
    log::info!("League snapshot replaced");
    HttpResponse::NoContent().finish()
}

/// Reload the snapshot file. The last good snapshot is kept on failure.
async fn refresh(state: &AppState, path: &Path) {
    let loaded = load_store_payload(path).await;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return,
    };
    match loaded {
        Ok(Some(payload)) => {
            g.payload = Some(payload);
            g.last_updated = Some(Utc::now());
            g.is_online = true;
        }
        Ok(None) => log::warn!("Snapshot {} is empty", path.display()),
        Err(e) => {
            log::warn!("Reloading {} failed: {}", path.display(), e);
            g.is_online = false;
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    log::info!(
        "Starting server at http://{}:{} ({:?}, snapshot {})",
        config.host,
        config.port,
        config.access,
        config.data_file.display()
    );

    let state: AppState = Data::new(RwLock::new(ViewerState::default()));
    refresh(&state, &config.data_file).await;

    // Background task: reload the snapshot every poll interval (last fetch wins).
    let state_poll = state.clone();
    let poll_path = config.data_file.clone();
    let poll_interval = config.poll_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(poll_interval);
        loop {
            interval.tick().await;
            refresh(&state_poll, &poll_path).await;
        }
    });

    let bind = (config.host.clone(), config.port);
    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .app_data(web::PayloadConfig::new(MAX_SNAPSHOT_BYTES))
            .service(api_health)
            .service(favicon)
            .service(api_viewer)
            .service(api_standings)
            .service(api_matches)
            .service(api_report_csv)
            .service(api_participation)
            .service(api_put_league)
    })
    .bind(bind)?
    .run()
    .await
}
