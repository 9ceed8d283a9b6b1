use std::collections::HashSet;

use appendix::id_generator::{IdGenerator, DEFAULT_PREFIX};
use appendix::prelude::*;
use appendix::{IdError, MemoryDocument, UidOutcome};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `<div id="id-tests"><p></p><span></span></div><div id="have-an-id"></div>`
fn fixture() -> MemoryDocument {
    init_logging();
    let doc = MemoryDocument::new();
    let tests = doc.create_element("div");
    tests.set_attr("id", "id-tests");
    tests.append(&doc.create_element("p"));
    tests.append(&doc.create_element("span"));
    let with_id = doc.create_element("div");
    with_id.set_attr("id", "have-an-id");
    doc.body().append(&tests).append(&with_id);
    doc
}

#[test]
fn test_reads_existing_id() {
    let doc = fixture();
    assert_eq!(doc.select("#have-an-id").uid().as_deref(), Some("have-an-id"));
}

#[test]
fn test_read_does_not_generate() {
    let doc = fixture();
    let p = doc.select("#id-tests p");
    assert_eq!(p.uid(), None);
    assert_eq!(p.uid_with(false), Ok(UidOutcome::Id(None)));
    assert_eq!(p.attr("id"), None);
}

#[test]
fn test_read_is_idempotent() {
    let doc = fixture();
    let span = doc.select("#id-tests span");
    span.ensure_uid().unwrap();
    let first = span.uid();
    let second = span.uid();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_set_then_read() {
    let doc = fixture();
    let p = doc.select("#id-tests p");
    assert_eq!(p.set_uid("force-id").attr("id").as_deref(), Some("force-id"));
    assert_eq!(p.uid().as_deref(), Some("force-id"));
    assert_eq!(p.uid_with("other"), Ok(UidOutcome::Updated));
    assert_eq!(p.uid().as_deref(), Some("other"));
}

#[test]
fn test_force_generates_and_assigns() {
    let doc = fixture();
    let span = doc.select("#id-tests span");
    let id = span.ensure_uid().unwrap().unwrap();
    assert!(id.starts_with(DEFAULT_PREFIX));
    assert_eq!(span.attr("id"), Some(id.clone()));
    assert_eq!(doc.get_element_by_id(&id).as_ref(), span.first());
}

#[test]
fn test_force_keeps_existing_id() {
    let doc = fixture();
    assert_eq!(
        doc.select("#have-an-id").uid_with(true),
        Ok(UidOutcome::Id(Some("have-an-id".to_string())))
    );

    let p = doc.select("#id-tests p");
    p.set_uid("force-id");
    assert_eq!(p.ensure_uid(), Ok(Some("force-id".to_string())));
}

#[test]
fn test_empty_id_counts_as_missing() {
    let doc = fixture();
    let span = doc.select("#id-tests span");
    span.set_attr("id", "");
    assert_eq!(span.uid_with(false), Ok(UidOutcome::Id(None)));
    assert_eq!(span.attr("id").as_deref(), Some(""));

    let generated = span.ensure_uid().unwrap().unwrap();
    assert!(!generated.is_empty());
}

#[test]
fn test_unset() {
    let doc = fixture();
    let p = doc.select("#id-tests p");
    p.set_uid("force-id");
    assert_eq!(p.clear_uid().attr("id"), None);

    let with_id = doc.select("#have-an-id");
    assert_eq!(with_id.uid_with(None::<&str>), Ok(UidOutcome::Updated));
    assert!(!with_id.has_attr("id"));
    assert!(doc.get_element_by_id("have-an-id").is_none());
}

#[test]
fn test_empty_selection_is_noop() {
    let doc = fixture();
    let nothing = doc.select("#missing");
    assert!(nothing.is_empty());
    assert_eq!(nothing.uid(), None);
    assert_eq!(nothing.ensure_uid(), Ok(None));
    assert_eq!(nothing.set_uid("x").uid(), None);
    assert_eq!(nothing.clear_uid().len(), 0);
    assert!(doc.get_element_by_id("x").is_none());
}

#[test]
fn test_only_first_element_is_touched() {
    let doc = fixture();
    let both = doc.select("#id-tests p, #id-tests span");
    assert_eq!(both.len(), 2);
    both.set_uid("first");
    assert_eq!(both.get(0).and_then(|el| el.attr("id")).as_deref(), Some("first"));
    assert_eq!(both.get(1).and_then(|el| el.attr("id")), None);
}

#[test]
fn test_generated_ids_are_unique_across_a_large_batch() {
    init_logging();
    const BATCH: usize = 16_558;

    let doc = MemoryDocument::new();
    let body = doc.body();
    let elements: Vec<_> = (0..BATCH)
        .map(|_| {
            let el = doc.create_element("i");
            body.append(&el);
            el
        })
        .collect();

    let ids: HashSet<String> = elements
        .into_iter()
        .map(|el| doc.wrap(vec![el]).ensure_uid().unwrap().unwrap())
        .collect();
    assert_eq!(ids.len(), BATCH);
}

#[test]
fn test_custom_generator_cap() {
    let doc = fixture();
    let generator = IdGenerator {
        prefix: "have-an-id".to_string(),
        length: 0,
        max_attempts: Some(3),
    };
    let span = doc.select("#id-tests span");
    assert_eq!(
        span.ensure_uid_with(&generator),
        Err(IdError::Exhausted { attempts: 3 })
    );
    assert_eq!(span.uid(), None);
}
