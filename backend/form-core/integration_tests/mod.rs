// Integration tests for form-core: the HTTP client and the controller against a
// mocked availability service, config loading, and error formatting.

mod availability {
    mod client;
}

mod config {
    mod env;
}

mod controller {
    mod flow;
}

mod error {
    mod availability;
}
