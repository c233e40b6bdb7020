//! Browser tests for the `NeoSDK` shell.
//!
//! Run with `wasm-pack test --headless --firefox apps/web/neo-embed`.
//! Cross-origin message delivery needs a real NEO page, so these tests cover
//! config handling, iframe ownership and the JS-facing lifecycle.

#![cfg(target_arch = "wasm32")]

use neo_embed::NeoSdk;
use neo_embed::frame::SANDBOX_POLICY;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlIFrameElement};

wasm_bindgen_test_configure!(run_in_browser);

const NEO_ORIGIN: &str = "https://acme.neohr.io";

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("test runs in a document")
}

fn set(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).expect("set config key");
}

fn config() -> Object {
    let config = Object::new();
    set(&config, "neoOrigin", &JsValue::from_str(NEO_ORIGIN));
    set(
        &config,
        "mintToken",
        &Function::new_no_args("return Promise.resolve('jwt');"),
    );
    config
}

fn container() -> HtmlElement {
    let document = document();
    let element = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("document has a body")
        .append_child(&element)
        .expect("append container");
    element
}

fn error_text(error: JsValue) -> String {
    error
        .dyn_into::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .expect("thrown value is an Error")
}

/// **VALUE**: Verifies the iframe the SDK creates.
///
/// **WHY THIS MATTERS**: The sandbox is the only restriction the host places on
/// the embedded app. Creating the frame must not navigate it either; that is
/// `init()`'s job.
///
/// **BUG THIS CATCHES**: Would catch a widened sandbox, a missing container
/// append, or a `src` set during construction.
#[wasm_bindgen_test]
fn given_container_when_constructed_then_sandboxed_iframe_appended_without_src() {
    // GIVEN: A container
    let container = container();
    let config = config();
    set(&config, "container", &container);

    // WHEN: Constructing
    let sdk = NeoSdk::new(config.into()).expect("construction should succeed");

    // THEN: One sandboxed iframe inside the container, not yet navigated
    let iframe = sdk.get_iframe();
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(iframe.get_attribute("sandbox").as_deref(), Some(SANDBOX_POLICY));
    assert_eq!(iframe.style().get_property_value("width").ok().as_deref(), Some("100%"));
    assert!(iframe.src().is_empty());
}

/// **VALUE**: Verifies that `init()` loads the boot page.
///
/// **WHY THIS MATTERS**: The embedded app only sends ready from the boot page.
///
/// **BUG THIS CATCHES**: Would catch a wrong boot path or `init()` resolving
/// without navigating.
#[wasm_bindgen_test]
async fn given_constructed_sdk_when_init_then_iframe_points_at_boot_page() {
    // GIVEN: A constructed SDK
    let config = config();
    set(&config, "container", &container());
    let sdk = NeoSdk::new(config.into()).expect("construction should succeed");

    // WHEN: Initializing
    JsFuture::from(sdk.init()).await.expect("init should resolve");

    // THEN: The frame is at the boot URL
    assert_eq!(
        sdk.get_iframe().src(),
        format!("{NEO_ORIGIN}/organization/embed/boot")
    );

    sdk.destroy(None);
}

/// **VALUE**: Verifies that `init()` boots the frame before it returns.
///
/// **WHY THIS MATTERS**: Hosts call `init()` without awaiting and may tear the
/// embed down in the same tick (a component mounting and unmounting). If the
/// listener were attached later, it would land after `destroy()` and never be
/// removed.
///
/// **BUG THIS CATCHES**: Would catch if `init()` defers `start` to a later
/// microtask (e.g. by running it inside the returned promise's future).
#[wasm_bindgen_test]
async fn given_init_not_awaited_when_destroyed_in_same_tick_then_frame_stays_removed() {
    // GIVEN: A constructed SDK in its own container
    let parent = container();
    let config = config();
    set(&config, "container", &parent);
    let sdk = NeoSdk::new(config.into()).expect("construction should succeed");
    let iframe = sdk.get_iframe();

    // WHEN: Initializing without awaiting
    let pending = sdk.init();

    // THEN: The boot page is already set
    assert_eq!(iframe.src(), format!("{NEO_ORIGIN}/organization/embed/boot"));

    // WHEN: Destroying in the same tick, then letting microtasks run
    sdk.destroy(None);
    JsFuture::from(pending).await.expect("init should resolve");

    // THEN: The frame is gone and nothing re-attached or re-navigated it
    assert!(iframe.parent_node().is_none());
    assert_eq!(parent.child_element_count(), 0);
    assert_eq!(iframe.src(), format!("{NEO_ORIGIN}/organization/embed/boot"));
}

#[wasm_bindgen_test]
fn given_created_iframe_when_destroyed_twice_then_second_removal_is_harmless() {
    let parent = container();
    let config = config();
    set(&config, "container", &parent);
    let sdk = NeoSdk::new(config.into()).expect("construction should succeed");

    sdk.destroy(None);
    sdk.destroy(None);

    assert_eq!(parent.child_element_count(), 0);
    assert!(sdk.get_iframe().parent_node().is_none());
}

/// **VALUE**: Verifies iframe removal on destroy follows ownership.
///
/// **WHY THIS MATTERS**: A host-supplied iframe is part of the host's layout and
/// must survive `destroy()`; a created one must not leak.
///
/// **BUG THIS CATCHES**: Would catch removal of supplied iframes, or a
/// `removeIframe` default other than `true`.
#[wasm_bindgen_test]
async fn given_created_and_supplied_iframes_when_destroyed_then_only_created_is_removed() {
    // GIVEN: One SDK with a created iframe, one with a supplied iframe
    let created_parent = container();
    let created_config = config();
    set(&created_config, "container", &created_parent);
    let created = NeoSdk::new(created_config.into()).expect("created-frame SDK");

    let supplied_parent = container();
    let supplied_frame = document()
        .create_element("iframe")
        .expect("create iframe")
        .dyn_into::<HtmlIFrameElement>()
        .expect("iframe element");
    supplied_parent
        .append_child(&supplied_frame)
        .expect("append supplied iframe");
    let supplied_config = config();
    set(&supplied_config, "iframe", &supplied_frame);
    let supplied = NeoSdk::new(supplied_config.into()).expect("supplied-frame SDK");

    JsFuture::from(created.init()).await.expect("init created");
    JsFuture::from(supplied.init()).await.expect("init supplied");

    // WHEN: Destroying both with the default
    created.destroy(None);
    supplied.destroy(None);

    // THEN: Only the created iframe is gone
    assert_eq!(created_parent.child_element_count(), 0);
    assert_eq!(supplied_parent.child_element_count(), 1);
    assert!(supplied.get_iframe().is_same_node(Some(&supplied_frame)));
}

#[wasm_bindgen_test]
fn given_remove_iframe_false_when_destroyed_then_created_iframe_stays() {
    let parent = container();
    let config = config();
    set(&config, "container", &parent);
    let sdk = NeoSdk::new(config.into()).expect("construction should succeed");

    sdk.destroy(Some(false));
    sdk.destroy(Some(false));

    assert_eq!(parent.child_element_count(), 1);
}

/// **VALUE**: Verifies that required config keys are enforced at construction.
///
/// **WHY THIS MATTERS**: Without `mintToken` the handshake can never complete;
/// failing at construction beats a frame stuck on the boot screen.
///
/// **BUG THIS CATCHES**: Would catch if a missing or mistyped key is accepted.
#[wasm_bindgen_test]
fn given_invalid_configs_when_constructed_then_throws_config_errors() {
    // GIVEN: Configs missing or mistyping required keys
    let missing_mint = Object::new();
    set(&missing_mint, "neoOrigin", &JsValue::from_str(NEO_ORIGIN));

    let mint_not_function = config();
    set(&mint_not_function, "mintToken", &JsValue::from_str("jwt"));

    let origin_not_string = config();
    set(&origin_not_string, "neoOrigin", &JsValue::from_f64(42.0));

    let cases = [
        (JsValue::from(missing_mint), "'mintToken' is required"),
        (JsValue::from(mint_not_function), "'mintToken' must be a function"),
        (JsValue::from(origin_not_string), "'neoOrigin' must be a string"),
        (JsValue::UNDEFINED, "must be an object"),
    ];

    for (config, expected) in cases {
        // WHEN: Constructing
        let result = NeoSdk::new(config);

        // THEN: A config error naming the key
        let text = error_text(result.err().expect("construction should fail"));
        assert!(text.starts_with("Config Error"), "{text}");
        assert!(text.contains(expected), "{text} should contain {expected}");
    }
}

#[wasm_bindgen_test]
fn given_unvalidated_origin_when_constructed_then_still_succeeds() {
    let config = config();
    set(&config, "neoOrigin", &JsValue::from_str("acme.neohr.io"));
    set(&config, "container", &container());

    let sdk = NeoSdk::new(config.into());

    assert!(sdk.is_ok(), "validation only warns");
}

#[wasm_bindgen_test]
async fn given_config_when_create_neo_sdk_then_returns_started_sdk() {
    let config = config();
    set(&config, "container", &container());

    let sdk = neo_embed::create_neo_sdk(config.into())
        .await
        .expect("createNeoSDK should succeed");

    assert!(sdk.get_iframe().src().ends_with("/organization/embed/boot"));
    sdk.destroy(None);
}
