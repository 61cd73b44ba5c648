// Unit tests for the form controller against scripted availability replies

use crate::availability::{Availability, AvailabilityCheck};
use crate::controller::{ControllerSettings, FormController, Rejection, ValidationOutcome};
use crate::error::AvailabilityError;
use crate::view::FormView;
use crate::view::memory::MemoryView;

use common::{ErrorLocation, HttpStatusCode};
use models::{Field, MessageCatalog, Validity};

use std::collections::HashMap;
use std::panic::Location;
use std::rc::Rc;
use std::sync::Mutex;

use tokio::sync::{mpsc, oneshot};
use tokio::task::{LocalSet, spawn_local};
use url::Url;

// ============================================
// TEST DOUBLES
// ============================================

#[derive(Clone, Copy)]
enum Reply {
    Free,
    Taken(u16, &'static str),
    Unreachable,
}

/// Answers every check with the same reply and records what was asked.
struct ScriptedChecker {
    reply: Reply,
    calls: Mutex<Vec<(Field, String)>>,
}

impl ScriptedChecker {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn answer(&self, field: Field, value: &str) -> Result<Availability, AvailabilityError> {
        self.calls.lock().unwrap().push((field, value.to_string()));
        match self.reply {
            Reply::Free => Ok(Availability::Free),
            Reply::Taken(status, reason) => Ok(Availability::Taken {
                status: HttpStatusCode(status),
                reason: reason.to_string(),
            }),
            Reply::Unreachable => Err(AvailabilityError::Http {
                message: "connection refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl AvailabilityCheck for ScriptedChecker {
    async fn check_long(&self, long_url: &str) -> Result<Availability, AvailabilityError> {
        self.answer(Field::Long, long_url)
    }

    async fn check_short(&self, slug: &str) -> Result<Availability, AvailabilityError> {
        self.answer(Field::Short, slug)
    }
}

/// Holds every check open until the test releases it.
struct GatedChecker {
    gates: Mutex<HashMap<String, oneshot::Receiver<Availability>>>,
    started: mpsc::UnboundedSender<String>,
}

impl GatedChecker {
    async fn wait(&self, value: &str) -> Result<Availability, AvailabilityError> {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(value)
            .expect("gate registered for value");
        self.started.send(value.to_string()).unwrap();
        Ok(gate.await.expect("gate released"))
    }
}

impl AvailabilityCheck for GatedChecker {
    async fn check_long(&self, long_url: &str) -> Result<Availability, AvailabilityError> {
        self.wait(long_url).await
    }

    async fn check_short(&self, slug: &str) -> Result<Availability, AvailabilityError> {
        self.wait(slug).await
    }
}

fn settings() -> ControllerSettings {
    ControllerSettings::new(&Url::parse("http://127.0.0.1:7070").unwrap())
}

fn controller(reply: Reply) -> FormController<MemoryView, ScriptedChecker> {
    let controller = FormController::new(MemoryView::new(), ScriptedChecker::new(reply), settings());
    controller.initialize(true);
    controller
}

fn calls(controller: &FormController<MemoryView, ScriptedChecker>) -> usize {
    controller_calls(controller).len()
}

fn controller_calls(controller: &FormController<MemoryView, ScriptedChecker>) -> Vec<(Field, String)> {
    controller.checker().calls.lock().unwrap().clone()
}

// ============================================
// INITIALIZATION
// ============================================

/// **VALUE**: Initialization shows the service prefix and applies the checkbox state.
///
/// **BUG THIS CATCHES**: Would catch the slug input staying enabled while the checkbox
/// starts unchecked.
#[tokio::test]
async fn given_unchecked_box_when_initialized_then_prefix_set_and_slug_disabled() {
    let controller = FormController::new(MemoryView::new(), ScriptedChecker::new(Reply::Free), settings());

    controller.initialize(false);

    assert_eq!(controller.view().prefix(), "127.0.0.1:7070/");
    assert!(!controller.view().field(Field::Short).enabled);
    assert!(!controller.is_custom_slug_enabled());
    assert_eq!(
        controller.validate_short("abc").await,
        ValidationOutcome::Skipped
    );
    assert_eq!(calls(&controller), 0);
}

// ============================================
// SLUG VALIDATION
// ============================================

/// **VALUE**: Too-short slugs are rejected locally without a request.
///
/// **WHY THIS MATTERS**: The slug check runs on every keystroke; the first two
/// keystrokes must never reach the service.
///
/// **BUG THIS CATCHES**: Would catch the local check being moved after the request.
#[tokio::test]
async fn given_short_slug_when_validated_then_too_short_without_request() {
    let controller = controller(Reply::Free);

    for slug in ["", "a", "ab"] {
        let outcome = controller.validate_short(slug).await;
        assert!(matches!(
            outcome,
            ValidationOutcome::Invalid(Rejection::TooShort { min: 3, .. })
        ));
        let state = controller.view().field(Field::Short);
        assert_eq!(state.validity(), Validity::Invalid);
        assert_eq!(
            state.message(),
            Some("URL too short (at least 3 characters)")
        );
    }

    assert_eq!(calls(&controller), 0);
}

/// **VALUE**: Slugs with disallowed characters are rejected locally without a request.
#[tokio::test]
async fn given_slug_with_dollar_when_validated_then_unacceptable_without_request() {
    let controller = controller(Reply::Free);

    let outcome = controller.validate_short("ab$").await;

    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(Rejection::UnacceptableChars)
    );
    let state = controller.view().field(Field::Short);
    assert_eq!(state.validity().css_class(), Some("invalid"));
    assert_eq!(
        state.message(),
        Some(MessageCatalog::default().unacceptable_chars.as_str())
    );
    assert_eq!(calls(&controller), 0);
}

/// **VALUE**: A refused slug shows the canned "already in use" text.
#[tokio::test]
async fn given_taken_slug_when_validated_then_already_used() {
    let controller = controller(Reply::Taken(406, ""));

    let outcome = controller.validate_short("abc").await;

    assert_eq!(outcome, ValidationOutcome::Invalid(Rejection::AlreadyUsed));
    let state = controller.view().field(Field::Short);
    assert_eq!(state.validity().css_class(), Some("invalid"));
    assert_eq!(state.message(), Some("This URL is already in use"));
    assert_eq!(
        controller_calls(&controller),
        vec![(Field::Short, "abc".to_string())]
    );
}

/// **VALUE**: A free slug is marked valid and its message hidden.
#[tokio::test]
async fn given_free_slug_after_rejection_when_validated_then_valid_and_message_hidden() {
    let controller = controller(Reply::Free);
    controller.validate_short("ab").await;

    let outcome = controller.validate_short("abc").await;

    assert_eq!(outcome, ValidationOutcome::Valid);
    let state = controller.view().field(Field::Short);
    assert_eq!(state.validity().css_class(), Some("valid"));
    assert!(!state.is_message_visible());
}

/// **VALUE**: The configured minimum length and texts are honoured.
#[tokio::test]
async fn given_custom_settings_when_slug_too_short_then_uses_configured_text() {
    let messages = MessageCatalog {
        too_short: "Need {min}+".to_string(),
        ..MessageCatalog::default()
    };
    let controller = FormController::new(
        MemoryView::new(),
        ScriptedChecker::new(Reply::Free),
        settings().with_min_slug_length(5).with_messages(messages),
    );
    controller.initialize(true);

    controller.validate_short("abcd").await;

    assert_eq!(
        controller.view().field(Field::Short).message(),
        Some("Need 5+")
    );
}

// ============================================
// LONG URL VALIDATION
// ============================================

/// **VALUE**: An accepted long URL is marked valid with the message hidden.
#[tokio::test]
async fn given_free_long_url_when_validated_then_valid() {
    let controller = controller(Reply::Free);

    let outcome = controller.validate_long("http://x.com").await;

    assert_eq!(outcome, ValidationOutcome::Valid);
    let state = controller.view().field(Field::Long);
    assert_eq!(state.validity(), Validity::Valid);
    assert!(!state.is_message_visible());
}

/// **VALUE**: The service's own text is shown verbatim for a refused long URL.
///
/// **BUG THIS CATCHES**: Would catch replacing the server reason with a canned text.
#[tokio::test]
async fn given_conflict_with_body_when_long_validated_then_body_is_message() {
    let controller = controller(Reply::Taken(409, "Taken"));

    let outcome = controller.validate_long("http://x.com").await;

    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(Rejection::Refused("Taken".to_string()))
    );
    let state = controller.view().field(Field::Long);
    assert_eq!(state.validity(), Validity::Invalid);
    assert_eq!(state.message(), Some("Taken"));
}

/// **VALUE**: An empty refusal body falls back to the catalog text.
#[tokio::test]
async fn given_refusal_without_body_when_long_validated_then_fallback_text() {
    let controller = controller(Reply::Taken(406, "  "));

    controller.validate_long("javascript:alert(1)").await;

    assert_eq!(
        controller.view().field(Field::Long).message(),
        Some("This is no valid url to store.")
    );
}

/// **VALUE**: Emptying the long URL clears the display without a request.
#[tokio::test]
async fn given_invalid_long_url_when_emptied_then_cleared_without_request() {
    let controller = controller(Reply::Taken(409, "Taken"));
    controller.validate_long("http://x.com").await;

    let outcome = controller.validate_long("").await;

    assert_eq!(outcome, ValidationOutcome::Cleared);
    let state = controller.view().field(Field::Long);
    assert_eq!(state.validity(), Validity::Unset);
    assert!(!state.is_message_visible());
    assert_eq!(calls(&controller), 1);
}

/// **VALUE**: A transport failure is logged and the previous state kept.
///
/// **WHY THIS MATTERS**: Without a reply there is nothing truthful to show; flipping
/// the field to either state would be a guess.
///
/// **BUG THIS CATCHES**: Would catch treating a network error as a rejection.
#[tokio::test]
async fn given_unreachable_service_when_validated_then_state_unchanged() {
    let controller = controller(Reply::Unreachable);
    controller.view().set_valid(Field::Long);

    let long = controller.validate_long("http://x.com").await;
    let short = controller.validate_short("abc").await;

    assert_eq!(long, ValidationOutcome::Unchanged);
    assert_eq!(short, ValidationOutcome::Unchanged);
    assert_eq!(
        controller.view().field(Field::Long).validity(),
        Validity::Valid
    );
    assert_eq!(
        controller.view().field(Field::Short).validity(),
        Validity::Unset
    );
}

// ============================================
// CHECKBOX
// ============================================

/// **VALUE**: Unchecking disables the slug input and removes both classes.
#[tokio::test]
async fn given_validated_slug_when_unchecked_then_disabled_and_cleared() {
    for reply in [Reply::Free, Reply::Taken(406, "")] {
        let controller = controller(reply);
        controller.validate_short("abc").await;

        let outcome = controller.set_custom_slug_enabled(false, "abc").await;

        assert_eq!(outcome, ValidationOutcome::Cleared);
        let state = controller.view().field(Field::Short);
        assert!(!state.enabled);
        assert_eq!(state.validity().css_class(), None);
        assert!(!state.is_message_visible());
    }
}

/// **VALUE**: Checking the box re-validates the current slug.
///
/// **BUG THIS CATCHES**: Would catch the toggle only enabling the input, leaving text
/// typed before the box was checked unvalidated.
#[tokio::test]
async fn given_unchecked_box_with_text_when_checked_then_slug_revalidated() {
    let controller = FormController::new(MemoryView::new(), ScriptedChecker::new(Reply::Free), settings());
    controller.initialize(false);

    let outcome = controller.set_custom_slug_enabled(true, "my-link").await;

    assert_eq!(outcome, ValidationOutcome::Valid);
    let state = controller.view().field(Field::Short);
    assert!(state.enabled);
    assert_eq!(state.validity(), Validity::Valid);
    assert_eq!(
        controller_calls(&controller),
        vec![(Field::Short, "my-link".to_string())]
    );
}

// ============================================
// ORDERING
// ============================================

/// **VALUE**: A slow reply for an older value never overwrites the newer result.
///
/// **WHY THIS MATTERS**: Fast typing produces overlapping requests. Without ordering the
/// field could end up red for a slug the service just reported free.
///
/// **BUG THIS CATCHES**: Would catch removing the ticket check after the await.
#[tokio::test]
async fn given_overlapping_slug_checks_when_older_resolves_last_then_newer_result_kept() {
    LocalSet::new()
        .run_until(async {
            let (older_tx, older_rx) = oneshot::channel();
            let (newer_tx, newer_rx) = oneshot::channel();
            let (started_tx, mut started_rx) = mpsc::unbounded_channel();
            let checker = GatedChecker {
                gates: Mutex::new(HashMap::from([
                    ("abc".to_string(), older_rx),
                    ("abcd".to_string(), newer_rx),
                ])),
                started: started_tx,
            };
            let controller = Rc::new(FormController::new(MemoryView::new(), checker, settings()));
            controller.initialize(true);

            // GIVEN: Two checks in flight, older first
            let older = spawn_local({
                let controller = Rc::clone(&controller);
                async move { controller.validate_short("abc").await }
            });
            assert_eq!(started_rx.recv().await.unwrap(), "abc");
            let newer = spawn_local({
                let controller = Rc::clone(&controller);
                async move { controller.validate_short("abcd").await }
            });
            assert_eq!(started_rx.recv().await.unwrap(), "abcd");

            // WHEN: The newer reply arrives first, then the older one
            newer_tx.send(Availability::Free).unwrap();
            assert_eq!(newer.await.unwrap(), ValidationOutcome::Valid);
            older_tx
                .send(Availability::Taken {
                    status: HttpStatusCode(406),
                    reason: String::new(),
                })
                .unwrap();

            // THEN: The older reply is dropped
            assert_eq!(older.await.unwrap(), ValidationOutcome::Superseded);
            assert_eq!(
                controller.view().field(Field::Short).validity(),
                Validity::Valid
            );
        })
        .await;
}

/// **VALUE**: A reply arriving after the box was unchecked leaves the field cleared.
#[tokio::test]
async fn given_pending_slug_check_when_unchecked_then_late_reply_ignored() {
    LocalSet::new()
        .run_until(async {
            let (reply_tx, reply_rx) = oneshot::channel();
            let (started_tx, mut started_rx) = mpsc::unbounded_channel();
            let checker = GatedChecker {
                gates: Mutex::new(HashMap::from([("abc".to_string(), reply_rx)])),
                started: started_tx,
            };
            let controller = Rc::new(FormController::new(MemoryView::new(), checker, settings()));
            controller.initialize(true);

            let pending = spawn_local({
                let controller = Rc::clone(&controller);
                async move { controller.validate_short("abc").await }
            });
            started_rx.recv().await.unwrap();

            controller.set_custom_slug_enabled(false, "abc").await;
            reply_tx.send(Availability::Free).unwrap();

            assert_eq!(pending.await.unwrap(), ValidationOutcome::Superseded);
            let state = controller.view().field(Field::Short);
            assert_eq!(state.validity(), Validity::Unset);
            assert!(!state.enabled);
        })
        .await;
}

/// **VALUE**: Clearing the long URL supersedes a request still in flight.
#[tokio::test]
async fn given_pending_long_check_when_input_emptied_then_late_reply_ignored() {
    LocalSet::new()
        .run_until(async {
            let (reply_tx, reply_rx) = oneshot::channel();
            let (started_tx, mut started_rx) = mpsc::unbounded_channel();
            let checker = GatedChecker {
                gates: Mutex::new(HashMap::from([("http://x.com".to_string(), reply_rx)])),
                started: started_tx,
            };
            let controller = Rc::new(FormController::new(MemoryView::new(), checker, settings()));
            controller.initialize(false);

            let pending = spawn_local({
                let controller = Rc::clone(&controller);
                async move { controller.validate_long("http://x.com").await }
            });
            started_rx.recv().await.unwrap();

            assert_eq!(
                controller.validate_long("").await,
                ValidationOutcome::Cleared
            );
            reply_tx
                .send(Availability::Taken {
                    status: HttpStatusCode(409),
                    reason: "Taken".to_string(),
                })
                .unwrap();

            assert_eq!(pending.await.unwrap(), ValidationOutcome::Superseded);
            assert!(
                !controller
                    .view()
                    .field(Field::Long)
                    .is_message_visible()
            );
        })
        .await;
}
