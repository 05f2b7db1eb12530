use pretty_assertions::assert_eq;
use quizgen::{
    config::OcrConfig,
    ocr::{HttpOcrClient, OcrEngine},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn create_test_config(base_url: String) -> OcrConfig {
    OcrConfig {
        base_url,
        api_key: "test-ocr-key".to_string(),
    }
}

#[tokio::test]
async fn forwards_the_document_and_returns_the_text_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/parse"))
        .and(header("authorization", "Bearer test-ocr-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"text": "extracted body"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpOcrClient::new(create_test_config(server.uri()));

    let text = client.extract_text(b"%PDF-1.4", "doc.pdf").await.unwrap();

    assert_eq!(text, "extracted body");
}

#[tokio::test]
async fn sends_a_multipart_body_with_the_file_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": ""})))
        .mount(&server)
        .await;

    let client = HttpOcrClient::new(create_test_config(server.uri()));
    client.extract_text(b"%PDF-1.4", "doc.pdf").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"doc.pdf\""));
    assert!(body.contains("application/pdf"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(500).set_body_string("provider exploded"))
        .mount(&server)
        .await;

    let client = HttpOcrClient::new(create_test_config(server.uri()));

    let err = client.extract_text(b"%PDF-1.4", "doc.pdf").await.unwrap_err();

    assert!(err.to_string().contains("status 500"));
}

#[tokio::test]
async fn malformed_provider_response_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/parse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = HttpOcrClient::new(create_test_config(server.uri()));

    assert!(client.extract_text(b"%PDF-1.4", "doc.pdf").await.is_err());
}

#[tokio::test]
async fn unreachable_provider_is_an_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpOcrClient::new(create_test_config(uri));

    assert!(client.extract_text(b"%PDF-1.4", "doc.pdf").await.is_err());
}
