// Browser tests for the live DOM backend
// Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use split_text_wasm::api::SplitText;
use split_text_wasm::{split_text, DomTree, MarkupSplit, RawOptions, SplitTextError, Target, WebTree};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, inner_html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("h1").unwrap();
    element.set_id(id);
    element.set_inner_html(inner_html);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_split_live_element_by_selector() {
    let element = mount("web-title", "ab <em>cd</em>");
    let mut tree = WebTree::from_window().unwrap();

    let result = split_text(&mut tree, Target::Selector("#web-title"), &RawOptions::default()).unwrap();

    assert_eq!(result.chars().len(), 4);
    assert_eq!(result.words().len(), 3);
    assert_eq!(element.text_content().unwrap(), "ab cd");

    let first = result.chars()[0].dyn_ref::<HtmlElement>().unwrap();
    assert_eq!(first.tag_name(), "DIV");
    assert_eq!(first.style().get_property_value("display").unwrap(), "inline-block");
    assert_eq!(first.style().get_property_value("position").unwrap(), "relative");
    assert!(element.query_selector("em").unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_invalid_tag_leaves_live_element_untouched() {
    let element = mount("web-invalid", "ab cd");
    let mut tree = WebTree::from_window().unwrap();
    let options = RawOptions::from_json(r#"{ "tag": "p" }"#).unwrap();

    let err = split_text(&mut tree, Target::Element(element.clone().into()), &options).unwrap_err();

    assert_eq!(err, SplitTextError::TagUnrecognized);
    assert_eq!(element.inner_html(), "ab cd");
    assert_eq!(tree.children(&element.into()).len(), 1);
}

fn js_options(options: serde_json::Value) -> JsValue {
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn thrown_message(target: JsValue, options: JsValue) -> String {
    SplitText::new(target, options)
        .err()
        .expect("construction should throw")
        .as_string()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_split_text_class_from_selector() {
    let element = mount("js-selector", "ab cd");

    let split = SplitText::new(JsValue::from_str("#js-selector"), JsValue::UNDEFINED).unwrap();

    assert_eq!(split.chars().length(), 4);
    assert_eq!(split.words().length(), 2);
    assert_eq!(element.text_content().unwrap(), "ab cd");
}

#[wasm_bindgen_test]
fn test_split_text_class_from_element_with_options() {
    let element = mount("js-element", "ab cd");
    let options = js_options(serde_json::json!({ "type": ["words"], "tag": "span" }));

    let split = SplitText::new(element.clone().into(), options).unwrap();

    assert_eq!(split.chars().length(), 0);
    assert_eq!(split.words().length(), 2);

    let first = split.words().get(0).dyn_into::<Element>().unwrap();
    assert_eq!(first.tag_name(), "SPAN");
    assert_eq!(first.text_content().unwrap(), "ab");
    assert_eq!(element.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn test_split_text_class_rejects_null_target() {
    assert_eq!(
        thrown_message(JsValue::NULL, JsValue::UNDEFINED),
        "The target element was not found."
    );
    assert_eq!(
        thrown_message(JsValue::from_str("#js-nowhere"), JsValue::UNDEFINED),
        "The target element was not found."
    );
}

#[wasm_bindgen_test]
fn test_split_text_class_reports_target_before_options() {
    let options = js_options(serde_json::json!({ "type": [] }));
    assert_eq!(
        thrown_message(JsValue::from_str("#js-nowhere"), options),
        "The target element was not found."
    );

    let element = mount("js-bad-options", "ab cd");
    let options = js_options(serde_json::json!({ "tag": "p" }));
    assert_eq!(
        thrown_message(element.clone().into(), options),
        "The tag option must be either \"div\" or \"span\"."
    );
    assert_eq!(element.inner_html(), "ab cd");
}

#[wasm_bindgen_test]
fn test_split_text_class_ignores_non_object_options() {
    mount("js-string-options", "ab cd");

    let split = SplitText::new(
        JsValue::from_str("#js-string-options"),
        JsValue::from_str("words"),
    )
    .unwrap();

    assert_eq!(split.chars().length(), 4);
    assert_eq!(split.words().length(), 2);
}

#[wasm_bindgen_test]
fn test_split_markup_from_js() {
    let options = js_options(serde_json::json!({ "type": ["words"] }));

    let value = split_text_wasm::api::split_markup("<p>a&nbsp;b c</p>", Some("p".into()), options).unwrap();
    let split: MarkupSplit = serde_wasm_bindgen::from_value(value).unwrap();

    assert_eq!(split.words, vec!["a\u{a0}b", "c"]);
    assert!(split.chars.is_empty());
}
