use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace embeds an ErrorLocation. If the
/// capture is wrong, a failed availability check points developers at the wrong code.
///
/// **BUG THIS CATCHES**: Would catch if file path or line extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current location and the line it is on
    let (location, expected_line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Error messages from the CLI and the browser console rely on
/// this format to stay readable.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops brackets or fields.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed ErrorLocation
    let location = ErrorLocation {
        file: "src/controller.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should match the bracketed format exactly
    assert_eq!(formatted, "[src/controller.rs:42:7]");
}
