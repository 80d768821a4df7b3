pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{document, extract, improve, layout, render, scoring};

/// Multipart framing on top of the file itself.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes() + UPLOAD_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/themes", get(layout::handlers::handle_list_themes))
        .route("/api/v1/parse", post(document::handlers::handle_parse))
        // Analysis
        .route("/api/v1/score", post(scoring::handlers::handle_score))
        .route("/api/v1/analyze", post(scoring::handlers::handle_analyze))
        // Writing
        .route("/api/v1/improve", post(improve::handlers::handle_improve))
        .route("/api/v1/build", post(improve::handlers::handle_build))
        // Documents
        .route("/api/v1/layout", post(layout::handlers::handle_layout))
        .route("/api/v1/export", post(render::handlers::handle_export))
        .route(
            "/api/v1/extract",
            post(extract::handlers::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const RESUME: &str = "Jane Doe\n\
        jane@example.com | 555-123-4567\n\
        SUMMARY\n\
        Backend engineer.\n\
        EXPERIENCE\n\
        Engineer | Acme | 2020 - Present\n\
        • Responsible for the billing service\n\
        • Built the ledger in Rust\n\
        EDUCATION\n\
        B.S. Computer Science\n\
        SKILLS\n\
        Rust, PostgreSQL";

    fn app() -> Router {
        build_router(AppState::new(Config::default()).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec(), disposition)
    }

    async fn post_value(uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, bytes, _) = post_json(uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_themes_listing() {
        let response = app()
            .oneshot(Request::get("/api/v1/themes").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let themes: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(themes.as_array().unwrap().len(), 6);
        assert_eq!(themes[0]["id"], "modern-blue");
        assert_eq!(themes[0]["primaryColor"]["r"], 37);
    }

    #[tokio::test]
    async fn test_parse_returns_sections() {
        let (status, body) = post_value("/api/v1/parse", json!({ "text": RESUME })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headerLines"][0], "Jane Doe");
        assert_eq!(body["sections"][1]["title"], "EXPERIENCE");
        assert_eq!(body["sections"][1]["lines"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_text_is_validation_error() {
        let (status, body) = post_value("/api/v1/parse", json!({ "text": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) =
            post_value("/api/v1/score", json!({ "resumeText": "", "jobDescription": "Rust" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_and_analyze_agree_without_api_key() {
        let body = json!({ "resumeText": RESUME, "jobDescription": "Rust and Kubernetes" });
        let (status, scored) = post_value("/api/v1/score", body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scored["backend"], "heuristic");
        assert_eq!(scored["matchedSkills"], json!(["Rust"]));
        assert_eq!(scored["missingSkills"], json!(["Kubernetes"]));

        let (_, analyzed) = post_value("/api/v1/analyze", body).await;
        assert_eq!(analyzed, scored);
    }

    #[tokio::test]
    async fn test_layout_with_unknown_theme_uses_default() {
        let (status, body) = post_value(
            "/api/v1/layout",
            json!({ "text": RESUME, "themeId": "no-such-theme" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["themeId"], "modern-blue");
        assert_eq!(body["pages"][0]["runs"][0]["text"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_layout_rejects_degenerate_geometry() {
        let (status, _) = post_value(
            "/api/v1/layout",
            json!({ "text": RESUME, "geometry": { "pageWidth": 10.0 } }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_improve_falls_back_to_local_rewrite() {
        let (status, body) = post_value(
            "/api/v1/improve",
            json!({ "resumeText": RESUME, "jobDescription": "Rust" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "heuristic");
        let improved = body["improvedText"].as_str().unwrap();
        assert!(improved.contains("• Managed the billing service"));
    }

    #[tokio::test]
    async fn test_build_from_form() {
        let (status, body) = post_value(
            "/api/v1/build",
            json!({ "form": { "name": "Jane Doe", "skills": ["Rust"] } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "heuristic");
        assert!(body["resumeText"]
            .as_str()
            .unwrap()
            .contains("--- TECHNICAL SKILLS ---\nRust"));

        let (status, _) = post_value("/api/v1/build", json!({ "form": {} })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_sets_download_headers() {
        let (status, bytes, disposition) = post_json(
            "/api/v1/export",
            json!({ "text": RESUME, "themeId": "tech-green", "format": "markdown" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            disposition.as_deref(),
            Some("attachment; filename=\"resume_tech_green.md\"")
        );
        assert!(String::from_utf8(bytes).unwrap().starts_with("# Jane Doe"));
    }

    fn multipart_upload(file_name: &str, content_type: &str, content: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARY";
        let mut body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn upload(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_extract_plain_text_upload() {
        let (status, value) =
            upload(multipart_upload("cv.txt", "text/plain", b"Jane Doe\nSKILLS\nRust")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["format"], "text");
        assert_eq!(value["text"], "Jane Doe\nSKILLS\nRust");
    }

    #[tokio::test]
    async fn test_extract_docx_upload() {
        let docx = crate::extract::docx::docx_fixture(&["Jane Doe", "SKILLS", "Rust"]);
        let (status, value) = upload(multipart_upload(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            &docx,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["format"], "docx");
        assert_eq!(value["text"], "Jane Doe\nSKILLS\nRust");
    }

    #[tokio::test]
    async fn test_extract_rejects_legacy_doc() {
        let (status, value) =
            upload(multipart_upload("cv.doc", "application/msword", b"\xd0\xcf\x11\xe0")).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(value["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_extract_corrupt_docx_is_unprocessable() {
        let (status, _) =
            upload(multipart_upload("cv.docx", "application/octet-stream", b"PK")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_export_pdf() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/export")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "text": RESUME, "themeId": "corporate-navy", "format": "pdf" })
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume_corporate_navy.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
