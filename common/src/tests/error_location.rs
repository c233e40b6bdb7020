use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` correctly captures file, line, and column.
///
/// **WHY THIS MATTERS**: ErrorLocation is attached to every error in the workspace.
/// If it captures the wrong position, every frame, mint and config error points
/// developers at the wrong code.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - File path extraction breaks
/// - Line/column capture fails
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Creating ErrorLocation from the current position
    let (location, expected_line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies that ErrorLocation Display formatting produces the expected format.
///
/// **WHY THIS MATTERS**: Every `thiserror` message in the workspace ends with the
/// location. If the format breaks, logged errors lose their debugging value.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Display implementation changes format (e.g., removes brackets)
/// - File path, line, or column are missing from output
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should produce "[file:line:column]" format
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(
        formatted.contains("error_location.rs"),
        "Should include filename"
    );
    assert!(
        formatted.contains(&format!(":{}:{}]", location.line, location.column)),
        "Should include line and column"
    );
}

/// **VALUE**: Verifies that `#[track_caller]` propagation works correctly.
///
/// **WHY THIS MATTERS**: Error constructors such as `FrameError::post_message()`
/// rely on `#[track_caller]` so the location names the call site, not the constructor.
///
/// **BUG THIS CATCHES**: Would catch if location propagation breaks in refactoring.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from different call sites
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Should have same file but sequential line numbers
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
