use form_core::availability::{Availability, AvailabilityCheck, AvailabilityClient};
use form_core::error::AvailabilityError;

use common::HttpStatusCode;

use std::net::TcpListener;
use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A `200` for a long URL means free.
///
/// **BUG THIS CATCHES**: Would catch the client hitting the wrong path or query key.
#[tokio::test]
async fn given_service_accepts_long_url_when_checked_then_free() {
    // GIVEN: A service answering 200 for exactly this long URL
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("long", "http://x.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let client = AvailabilityClient::new(&server.uri()).unwrap();

    // WHEN: Checking it
    let result = client.check_long("http://x.com").await.unwrap();

    // THEN: Free
    assert_eq!(result, Availability::Free);
}

/// **VALUE**: A refusal carries the status and the body verbatim.
#[tokio::test]
async fn given_service_refuses_long_url_when_checked_then_taken_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("long", "http://x.com"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Taken"))
        .mount(&server)
        .await;
    let client = AvailabilityClient::new(&server.uri()).unwrap();

    let result = client.check_long("http://x.com").await.unwrap();

    assert_eq!(
        result,
        Availability::Taken {
            status: HttpStatusCode(409),
            reason: "Taken".to_string(),
        }
    );
}

/// **VALUE**: Only an exact `200` frees a long URL, while any `2xx` frees a slug.
///
/// **WHY THIS MATTERS**: The two checks have different acceptance rules on the service
/// side; treating `204` the same for both would mark a long URL valid that the service
/// never approved.
#[tokio::test]
async fn given_no_content_reply_when_checked_then_slug_free_but_long_taken() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = AvailabilityClient::new(&server.uri()).unwrap();

    let long = client.check_long("http://x.com").await.unwrap();
    let short = client.check_short("abc").await.unwrap();

    assert!(matches!(long, Availability::Taken { status, .. } if status.0 == 204));
    assert_eq!(short, Availability::Free);
}

/// **VALUE**: Slug checks go through the configured base URL.
#[tokio::test]
async fn given_service_refuses_slug_when_checked_then_taken() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("short", "abc"))
        .respond_with(ResponseTemplate::new(406))
        .expect(1)
        .mount(&server)
        .await;
    let client = AvailabilityClient::new(&server.uri()).unwrap();

    let result = client.check_short("abc").await.unwrap();

    assert!(matches!(result, Availability::Taken { status, .. } if status.0 == 406));
}

/// **VALUE**: An unreachable service surfaces as an `Http` error, not a verdict.
///
/// **BUG THIS CATCHES**: Would catch a connection failure being mapped to `Taken`.
#[tokio::test]
async fn given_no_service_when_checked_then_http_error() {
    // GIVEN: A port nothing listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = AvailabilityClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

    let result = client.check_short("abc").await;

    assert!(matches!(result, Err(AvailabilityError::Http { .. })));
}

/// **VALUE**: The configured timeout bounds a hung request.
///
/// **WHY THIS MATTERS**: Without a bound a hung service leaves the field pending forever.
#[tokio::test]
async fn given_slow_service_when_checked_with_timeout_then_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let client =
        AvailabilityClient::with_timeout(&server.uri(), Some(Duration::from_millis(200))).unwrap();

    let result = client.check_long("http://x.com").await;

    assert!(matches!(result, Err(AvailabilityError::Http { .. })));
}
