//! Routes de l'API web

use actix_web::{get, post, web, HttpResponse, Responder};
use seqvis_core::{CellParams, VisError, ALIGNMENT_RENDERER};
use tracing::{error, info, instrument, warn};

use crate::models::{
    AnnotateRequest, AnnotateResponse, AppState, BatchRenderRequest, BatchRenderResponse,
    ErrorResponse, FormatRequest, FormatResponse,
};

/// Bloc affiché sur la page d'accueil
const SAMPLE_BLOCK: &str = "MKTAYIAKQR\n||.|||.|||\nH  C  B   \nMKAAYIGKQR";

/// Convertit une erreur de la bibliothèque en réponse HTTP
fn error_response(err: &VisError) -> HttpResponse {
    match err {
        VisError::UnknownRenderer(_) | VisError::UnknownFormatter(_) => {
            warn!("Nom inconnu: {}", err);
            HttpResponse::NotFound().json(ErrorResponse::new(err.to_string(), 404))
        }
        VisError::MalformedAlignment(_) | VisError::ResidueIndexOutOfRange { .. } => {
            warn!("Alignement rejeté: {}", err);
            HttpResponse::UnprocessableEntity().json(ErrorResponse::with_details(
                "Alignement invalide".to_string(),
                err.to_string(),
                422,
            ))
        }
        _ => {
            seqvis_core::log_error!(err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string(), 500))
        }
    }
}

/// Route pour la page d'accueil
#[get("/")]
#[instrument(skip(data))]
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let sample = data
        .registry
        .render(ALIGNMENT_RENDERER, &CellParams::new(SAMPLE_BLOCK))
        .ok()
        .and_then(|output| output.fragment().map(|node| node.to_html()))
        .unwrap_or_default();

    let mut ctx = tera::Context::new();
    ctx.insert("title", "Sequence Alignment Grid");
    ctx.insert("version", env!("CARGO_PKG_VERSION"));
    ctx.insert("renderers", &data.registry.renderer_names());
    ctx.insert("formatters", &data.registry.formatter_names());
    ctx.insert("sample_html", &sample);
    ctx.insert("policy", &format!("{:?}", data.config.visualizer.policy));

    match data.tera.render("index.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok().content_type("text/html").body(rendered),
        Err(e) => {
            error!("Erreur de rendu du template: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Erreur de rendu".to_string(),
                500,
            ))
        }
    }
}

/// Définitions de colonnes pour la grille
#[get("/api/columns")]
#[instrument(skip(data))]
pub async fn columns(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.columns)
}

/// Rend une cellule avec le renderer nommé
#[post("/api/render/{name}")]
#[instrument(skip(data, params))]
pub async fn render_cell(
    data: web::Data<AppState>,
    name: web::Path<String>,
    params: web::Json<CellParams>,
) -> impl Responder {
    match data.registry.render(&name, &params) {
        Ok(output) => HttpResponse::Ok().json(output),
        Err(e) => error_response(&e),
    }
}

/// Rend une colonne entière
#[post("/api/render/{name}/batch")]
#[instrument(skip(data, request))]
pub async fn render_batch(
    data: web::Data<AppState>,
    name: web::Path<String>,
    request: web::Json<BatchRenderRequest>,
) -> impl Responder {
    info!("Rendu de {} cellules", request.values.len());

    match data.registry.render_column(&name, &request.values) {
        Ok(outputs) => HttpResponse::Ok().json(BatchRenderResponse { outputs }),
        Err(e) => error_response(&e),
    }
}

/// Formate une valeur avec le formateur nommé
#[post("/api/format/{name}")]
#[instrument(skip(data, request))]
pub async fn format_value(
    data: web::Data<AppState>,
    name: web::Path<String>,
    request: web::Json<FormatRequest>,
) -> impl Responder {
    match data.registry.format(&name, &request.value) {
        Ok(value) => HttpResponse::Ok().json(FormatResponse { value }),
        Err(e) => error_response(&e),
    }
}

/// Construit le bloc annoté depuis la sortie de l'aligneur
#[post("/api/annotate")]
#[instrument(skip(data, request))]
pub async fn annotate(
    data: web::Data<AppState>,
    request: web::Json<AnnotateRequest>,
) -> impl Responder {
    match data
        .annotator
        .annotate(&request.alignment, &request.hot, &request.cold)
    {
        Ok(annotated) => HttpResponse::Ok().json(AnnotateResponse::from(annotated)),
        Err(e) => error_response(&e),
    }
}

/// Route pour la santé de l'API
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Enregistre toutes les routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(columns)
        .service(render_batch)
        .service(render_cell)
        .service(format_value)
        .service(annotate)
        .service(health_check);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn state() -> web::Data<AppState> {
        let mut tera = tera::Tera::default();
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))
            .unwrap();
        web::Data::new(AppState::new(AppConfig::default(), tera).unwrap())
    }

    #[actix_web::test]
    async fn test_render_alignment_cell() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/render/seqAlignmentVis")
            .set_json(json!({"value": "AC\n.|\nHN\nGC"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["kind"], "fragment");
        assert_eq!(
            body["html"],
            "<div style=\"font-family:monospace\">\
             <span style=\"background-color:#FFCCCB;color:black\">A</span>C<br>\
             <span style=\"background-color:#FFCCCB;color:black\">.</span>|<br>GC</div>"
        );
    }

    #[actix_web::test]
    async fn test_render_passes_non_string() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/render/seqAlignmentVis")
            .set_json(json!({"value": 42}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"kind": "passthrough", "value": 42}));
    }

    #[actix_web::test]
    async fn test_unknown_renderer() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/render/nope")
            .set_json(json!({"value": "A"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_batch_render() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/render/seqAlignmentVis/batch")
            .set_json(json!({"values": ["A\n|\n \nA", null]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["outputs"][0]["kind"], "fragment");
        assert_eq!(body["outputs"][1], json!({"kind": "passthrough", "value": null}));
    }

    #[actix_web::test]
    async fn test_format_label() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        for (input, expected) in [
            ("Site saturation mutagenesis (SSM)", "SSM"),
            ("Error-prone PCR (epPCR)", "epPCR"),
            ("foo", "foo"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/format/shortenMutagenesisMethod")
                .set_json(json!({"value": input}))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["value"], expected);
        }
    }

    #[actix_web::test]
    async fn test_annotate_errors() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/annotate")
            .set_json(json!({"alignment": "target 0 AC 2\n 0 .| 2\nquery 0 GC 2", "hot": [0]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::post()
            .uri("/api/annotate")
            .set_json(json!({"alignment": "target 0 AC 2\n 0 .| 2\nquery 0 GC 2", "hot": [1]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["block"], "AC 2\n.| 2\nH   \nGC 2\n");
        assert_eq!(body["mismatches"], json!([1]));
        assert_eq!(body["hot"], 1);
    }

    #[actix_web::test]
    async fn test_index_and_columns() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("seqAlignmentVis"));
        assert!(page.contains("background-color:#d0ddfa"));

        let req = test::TestRequest::get().uri("/api/columns").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[2]["cellRenderer"], "seqAlignmentVis");
    }
}
