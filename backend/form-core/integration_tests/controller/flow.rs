use form_core::availability::AvailabilityClient;
use form_core::controller::{ControllerSettings, FormController, ValidationOutcome};
use form_core::view::memory::MemoryView;

use models::{Field, Validity};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> FormController<MemoryView, AvailabilityClient> {
    let client = AvailabilityClient::new(&server.uri()).unwrap();
    let settings = ControllerSettings::new(client.base_url());
    let controller = FormController::new(MemoryView::new(), client, settings);
    controller.initialize(true);
    controller
}

/// **VALUE**: End to end, a refused long URL shows the service's text.
#[tokio::test]
async fn given_real_client_when_long_url_refused_then_view_shows_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("long", "http://x.com"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Taken"))
        .mount(&server)
        .await;
    let controller = controller_for(&server);

    controller.validate_long("http://x.com").await;

    let state = controller.view().field(Field::Long);
    assert_eq!(state.validity(), Validity::Invalid);
    assert_eq!(state.message(), Some("Taken"));
}

/// **VALUE**: End to end, a free slug is marked valid.
#[tokio::test]
async fn given_real_client_when_slug_free_then_view_valid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/free"))
        .and(query_param("short", "abc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let controller = controller_for(&server);

    let outcome = controller.validate_short("abc").await;

    assert_eq!(outcome, ValidationOutcome::Valid);
    assert_eq!(
        controller.view().field(Field::Short).validity(),
        Validity::Valid
    );
}

/// **VALUE**: Syntactically invalid slugs never reach the service.
///
/// **BUG THIS CATCHES**: The mock expects zero requests; any request fails the test
/// when the server is dropped.
#[tokio::test]
async fn given_invalid_slugs_when_validated_then_no_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let controller = controller_for(&server);

    for slug in ["ab", "ab$", "no/slash"] {
        assert!(controller.validate_short(slug).await.is_invalid());
    }

    server.verify().await;
}

/// **VALUE**: The prefix label is derived from the service address.
#[tokio::test]
async fn given_mock_service_when_initialized_then_prefix_is_its_host_and_port() {
    let server = MockServer::start().await;
    let controller = controller_for(&server);

    let address = server.address();
    assert_eq!(
        controller.view().prefix(),
        format!("{}:{}/", address.ip(), address.port())
    );
}
