use crate::config::{BOOT_PATH, EmbedSettings};
use crate::error::ConfigError;

/// **VALUE**: Verifies the boot URL the frame is pointed at on start.
///
/// **WHY THIS MATTERS**: The embedded app only begins its ready handshake from the
/// boot page. A wrong path leaves the frame on a 404 and the session never becomes ready.
///
/// **BUG THIS CATCHES**: Would catch if `BOOT_PATH` or its concatenation changes.
#[test]
fn given_origin_when_boot_url_built_then_points_at_embed_boot_page() {
    // GIVEN: Settings for a NEO tenant
    let settings = EmbedSettings::new("https://acme.neohr.io");

    // WHEN: Building the boot URL
    let url = settings.boot_url();

    // THEN: It is the origin plus the fixed boot path
    assert_eq!(BOOT_PATH, "/organization/embed/boot");
    assert_eq!(url, "https://acme.neohr.io/organization/embed/boot");
}

/// **VALUE**: Verifies that construction never validates or rewrites the origin.
///
/// **WHY THIS MATTERS**: The session compares origins verbatim. Rejecting or
/// normalizing at construction would change which messages are accepted.
///
/// **BUG THIS CATCHES**: Would catch if `new` starts calling `validate()`
/// or normalizes the origin.
#[test]
fn given_trailing_slash_origin_when_constructed_then_kept_verbatim() {
    // GIVEN/WHEN: An origin that can never match a browser event
    let settings = EmbedSettings::new("https://acme.neohr.io/");

    // THEN: The origin is untouched, and only validate() complains
    assert_eq!(settings.neo_origin(), "https://acme.neohr.io/");
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn given_settings_without_redirect_when_read_then_redirect_is_none() {
    let settings = EmbedSettings::new("https://acme.neohr.io");

    assert_eq!(settings.redirect_to(), None);
    assert!(settings.validate().is_ok());
}

#[test]
fn given_bare_origin_with_redirect_when_validated_then_ok() {
    let settings = EmbedSettings::new("https://acme.neohr.io").with_redirect("/people");

    assert!(settings.validate().is_ok());
}

#[test]
fn given_origin_with_custom_port_when_validated_then_ok() {
    let settings = EmbedSettings::new("http://localhost:5173");

    assert!(settings.validate().is_ok());
}

/// **VALUE**: Verifies that origins browsers would report differently are flagged.
///
/// **WHY THIS MATTERS**: `MessageEvent.origin` omits default ports, paths and
/// upper-case hosts. Any of these in the config drops every inbound message,
/// which looks like the embed hanging forever.
///
/// **BUG THIS CATCHES**: Would catch if validation stops comparing against the
/// serialized origin.
#[test]
fn given_non_canonical_origins_when_validated_then_each_is_rejected() {
    // GIVEN: Origins that differ from their browser-reported form
    let origins = [
        "https://acme.neohr.io:443",
        "https://ACME.neohr.io",
        "https://acme.neohr.io/app",
        "",
        "acme.neohr.io",
        "ftp://acme.neohr.io",
    ];

    for origin in origins {
        // WHEN: Validating
        let result = EmbedSettings::new(origin).validate();

        // THEN: Each is a validation error
        assert!(
            matches!(result, Err(ConfigError::Validation { .. })),
            "'{origin}' should be rejected"
        );
    }
}

#[test]
fn given_relative_redirect_when_validated_then_rejected() {
    let settings = EmbedSettings::new("https://acme.neohr.io").with_redirect("people");

    let err = settings.validate().expect_err("relative redirect should fail");
    assert!(err.to_string().contains("must start with '/'"));
}
