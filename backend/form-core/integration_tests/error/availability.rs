use form_core::availability::AvailabilityClient;
use form_core::error::{AvailabilityError, CoreError};

/// **VALUE**: Errors raised through `?` carry the location of the failing call.
///
/// **WHY THIS MATTERS**: A bad base URL in a config file should point at the code that
/// parsed it, not at the generic `From` impl.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the
/// conversion or from `parse_base_url`.
#[test]
fn given_bad_base_url_when_client_built_then_error_includes_location() {
    let err = AvailabilityClient::new("definitely not a url").unwrap_err();

    let error_string = format!("{}", err);

    assert!(matches!(err, AvailabilityError::UrlParse { .. }));
    assert!(error_string.contains("URL Parse Error"));
    assert!(error_string.contains("availability/mod.rs"));
}

/// **VALUE**: `CoreError` displays the wrapped error unchanged.
#[test]
fn given_availability_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = AvailabilityClient::new("mailto:x@y.z").unwrap_err();
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
}
