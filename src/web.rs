use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::chart::render_timeline;
use crate::config::{PageConfig, ServerConfig, PAGE};
use crate::form::{handle_submission, selection_to_csv, FormSubmissionRequest};
use crate::page::{render_page, ResultView};
use crate::schedule::{random_schedule, Interval};

const MAX_RANDOM_COUNT: usize = 50;
const RANDOM_HORIZON: i64 = 24;

/// Read-only settings shared by every handler
pub struct AppState {
    pub page: PageConfig,
}

#[derive(Serialize)]
pub struct SelectResponse {
    success: bool,
    count: usize,
    selected: Vec<(i64, i64)>,
    selected_indices: Vec<usize>,
    selected_labels: Vec<String>,
    chart_svg: String,
    computed_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct RandomExampleQuery {
    count: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct ExampleResponse {
    start_input: String,
    end_input: String,
}

fn render_error(e: std::fmt::Error) -> actix_web::Error {
    error!("failed to render page: {}", e);
    actix_web::error::ErrorInternalServerError("Failed to render page")
}

fn error_json(message: impl Into<String>) -> serde_json::Value {
    serde_json::json!({"success": false, "error": message.into()})
}

// Form page
async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let page = &state.page;
    let html = render_page(page, page.default_starts, page.default_ends, ResultView::Empty)
        .map_err(render_error)?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

// Form submission: same page, with the result or error underneath
async fn submit_form(
    form: web::Form<FormSubmissionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let page = &state.page;
    let html = match handle_submission(&form) {
        Ok(outcome) => render_page(page, &form.start_input, &form.end_input, ResultView::Success(&outcome)),
        Err(e) => render_page(page, &form.start_input, &form.end_input, ResultView::Error(&e)),
    }
    .map_err(render_error)?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

// JSON selection endpoint
async fn api_select(
    req: web::Json<FormSubmissionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match handle_submission(&req) {
        Ok(outcome) => {
            let selection = &outcome.selection;
            let chart_svg = render_timeline(&state.page, &outcome.schedule, selection)
                .map_err(render_error)?;
            Ok(HttpResponse::Ok().json(SelectResponse {
                success: true,
                count: selection.len(),
                selected: selection.pairs(),
                selected_indices: selection.indices(),
                selected_labels: selection.indices().into_iter().map(Interval::label).collect(),
                chart_svg,
                computed_at: Utc::now(),
            }))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(error_json(e.to_string()))),
    }
}

// CSV download of the selection
async fn api_export(query: web::Query<FormSubmissionRequest>) -> Result<HttpResponse> {
    let outcome = match handle_submission(&query) {
        Ok(outcome) => outcome,
        Err(e) => return Ok(HttpResponse::BadRequest().json(error_json(e.to_string()))),
    };

    let csv = selection_to_csv(&outcome).map_err(|e| {
        error!("failed to build export: {}", e);
        actix_web::error::ErrorInternalServerError(format!("Failed to build CSV: {}", e))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(("Content-Disposition", "attachment; filename=\"activity_selection.csv\""))
        .body(csv))
}

// Random example for the form
async fn api_random_example(query: web::Query<RandomExampleQuery>) -> Result<HttpResponse> {
    let count = query.count.unwrap_or(8).clamp(1, MAX_RANDOM_COUNT);
    let schedule = random_schedule(&mut rand::thread_rng(), count, RANDOM_HORIZON);
    let join = |values: Vec<i64>| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    Ok(HttpResponse::Ok().json(ExampleResponse {
        start_input: join(schedule.starts()),
        end_input: join(schedule.ends()),
    }))
}

/// Registers every page and API route; static files are added by `start_server`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/", web::post().to(submit_form))
        .route("/api/select", web::post().to(api_select))
        .route("/api/export", web::get().to(api_export))
        .route("/api/example/random", web::get().to(api_random_example));
}

pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState { page: PAGE });

    info!("Starting web server on {}:{}", config.host, config.port);
    info!("Access the site at http://localhost:{}", config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
