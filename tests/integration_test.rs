//! Integration tests for the HSTS checker.
//!
//! These tests run the checker against local `httptest` mock servers. They do
//! not make real network requests; the transport failure cases use the
//! reserved `.invalid` TLD and a closed local port.

mod helpers;

use hsts_check::{CheckOutcome, HstsVerdict, IncompatibleReason};
use httptest::{matchers::*, responders::*, Expectation, Server};

use helpers::{closed_local_addr, hsts_server, root_url, test_checker};

fn incompatible(reason: IncompatibleReason) -> CheckOutcome {
    CheckOutcome::Verdict(HstsVerdict::Incompatible(reason))
}

#[tokio::test]
async fn test_no_hsts_header() {
    let server = hsts_server(200, None);
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(outcome, incompatible(IncompatibleReason::MissingHeader));
}

#[tokio::test]
async fn test_max_age_below_threshold() {
    let server = hsts_server(200, Some("max-age=10886399; includeSubDomains; preload"));
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(outcome, incompatible(IncompatibleReason::MaxAgeTooShort));
}

#[tokio::test]
async fn test_max_age_at_threshold_is_compatible() {
    let header = "max-age=10886400; includeSubDomains; preload";
    let server = hsts_server(200, Some(header));
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(
        outcome,
        CheckOutcome::Verdict(HstsVerdict::Compatible {
            header: header.to_string()
        })
    );
}

#[tokio::test]
async fn test_missing_include_subdomains() {
    let server = hsts_server(200, Some("max-age=31536000; preload"));
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(
        outcome,
        incompatible(IncompatibleReason::MissingIncludeSubDomains)
    );
}

#[tokio::test]
async fn test_missing_preload() {
    let server = hsts_server(200, Some("max-age=31536000; includeSubDomains"));
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(outcome, incompatible(IncompatibleReason::MissingPreload));
}

#[tokio::test]
async fn test_header_name_case_is_ignored() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).append_header(
                "STRICT-TRANSPORT-SECURITY",
                "max-age=63072000; includeSubDomains; preload",
            ),
        ),
    );
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert!(matches!(
        outcome,
        CheckOutcome::Verdict(HstsVerdict::Compatible { .. })
    ));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    // Only `/` is expected; following the Location would hit an unexpected
    // path and fail the mock server's verification on drop.
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(301).append_header("Location", "/final")),
    );
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(outcome, incompatible(IncompatibleReason::MissingHeader));
}

#[tokio::test]
async fn test_remote_status_is_not_consulted() {
    let header = "max-age=31536000; includeSubDomains; preload";
    let server = hsts_server(500, Some(header));
    let outcome = test_checker().evaluate(&root_url(&server)).await;
    assert_eq!(
        outcome,
        CheckOutcome::Verdict(HstsVerdict::Compatible {
            header: header.to_string()
        })
    );
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(2)
            .respond_with(
                status_code(200).append_header("Strict-Transport-Security", "max-age=300"),
            ),
    );
    let checker = test_checker();
    let url = root_url(&server);
    let first = checker.evaluate(&url).await;
    let second = checker.evaluate(&url).await;
    assert_eq!(first, second);
    assert_eq!(first, incompatible(IncompatibleReason::MaxAgeTooShort));
}

#[tokio::test]
async fn test_dns_failure_is_transport_error() {
    let outcome = test_checker()
        .evaluate("https://hsts-check-test.invalid/")
        .await;
    match outcome {
        CheckOutcome::TransportError(message) => {
            assert!(
                message.starts_with("Error making request: "),
                "unexpected message: {message}"
            );
            // The resolver failure from deep in the source chain reaches the caller
            assert!(message.contains("dns error"), "unexpected message: {message}");
            assert!(
                message.contains("hsts-check-test.invalid"),
                "unexpected message: {message}"
            );
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let url = format!("http://{}/", closed_local_addr());
    let outcome = test_checker().evaluate(&url).await;
    assert!(outcome.is_transport_error(), "got {outcome:?}");
}
