//! Transport request/response tests

use jsx_distill::{handle_request, serve, ExtractResponse};
use serde_json::{json, Value};

fn request(code: &str) -> String {
    json!({ "code": code }).to_string()
}

async fn exchange(input: &str) -> (usize, Vec<Value>) {
    let mut output = Vec::new();
    let answered = serve(input.as_bytes(), &mut output).await.expect("serve");
    let responses = String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line is JSON"))
        .collect();
    (answered, responses)
}

#[test]
fn test_response_matches_direct_extraction() {
    let code = "export const Hi = ({ who }) => <p>Hi {who}</p>;";
    let via_transport = serde_json::to_value(handle_request(&request(code))).unwrap();
    let direct = serde_json::to_value(jsx_distill::extract_source(code).unwrap()).unwrap();
    assert_eq!(via_transport, direct);
}

#[test]
fn test_missing_code_field() {
    let response = handle_request(r#"{"source": "x"}"#);
    assert!(!response.is_success());
    let ExtractResponse::Failure { error } = response else {
        unreachable!();
    };
    assert!(error.contains("code"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_serve_mixed_requests() {
    let input = format!(
        "{}\n   \n{}\nnot json\n{}\n",
        request("function A() { return <a />; }"),
        request("function B( { return"),
        request("const C = () => <c />;")
    );
    let (answered, responses) = exchange(&input).await;

    assert_eq!(answered, 4);
    assert_eq!(responses[0]["name"], "A");
    assert!(responses[1]["error"].is_string());
    assert!(responses[1].get("name").is_none());
    assert!(responses[2]["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request"));
    assert_eq!(responses[3]["name"], "C");
}

#[tokio::test]
async fn test_serve_empty_input() {
    let (answered, responses) = exchange("").await;
    assert_eq!(answered, 0);
    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_requests_are_independent() {
    let first = request("import a from 'a';\nexport const A = () => <a />;");
    let second = request("const B = () => <b />;");
    let (_, responses) = exchange(&format!("{}\n{}\n", first, second)).await;

    assert_eq!(responses[0]["imports"].as_array().unwrap().len(), 1);
    assert_eq!(responses[1]["imports"], json!([]));
    assert!(responses[1].get("exports").is_none());
}
