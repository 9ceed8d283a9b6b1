use std::time::Duration;

use appendix::prelude::*;
use appendix::{MemoryDocument, MemoryElement, ScrollOptions};
use egui::{Pos2, Rect, Vec2};
use futures::executor::block_on;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn boxed(doc: &MemoryDocument, tag: &str, min: (f32, f32), size: (f32, f32)) -> MemoryElement {
    let el = doc.create_element(tag);
    el.set_layout(Rect::from_min_size(Pos2::new(min.0, min.1), Vec2::new(size.0, size.1)));
    el
}

/// A 300x200 scroll pane at y=100 holding three 20px rows
fn pane_fixture() -> (MemoryDocument, MemoryElement) {
    init_logging();
    let doc = MemoryDocument::new();
    let pane = boxed(&doc, "div", (0.0, 100.0), (300.0, 200.0));
    pane.set_attr("class", "pane");
    doc.body().append(&pane);

    for (i, y) in [150.0, 500.0, 900.0].into_iter().enumerate() {
        let row = boxed(&doc, "p", (0.0, y), (300.0, 20.0));
        row.set_attr("id", &format!("row-{}", i));
        pane.append(&row);
    }
    (doc, pane)
}

#[test]
fn test_scroll_window_into_view() {
    let (doc, _) = pane_fixture();
    let options = ScrollOptions {
        margin: 40.0,
        ..ScrollOptions::default()
    };

    let mut done = doc.select("#row-2").animate_into_view(&options);
    assert!(!done.is_complete());
    assert_eq!(doc.pending_animations(), 1);

    doc.run_animations();
    assert_eq!(doc.scroll_top(), 860.0);
    assert!(done.is_complete());
}

#[test]
fn test_scroll_container_into_view() {
    let (doc, pane) = pane_fixture();
    let options = ScrollOptions {
        margin: 10.0,
        container: Some(".pane".to_string()),
        ..ScrollOptions::default()
    };

    let row = doc.select("#row-1");
    let done = row.animate_into_view(&options);
    doc.run_animations();
    block_on(done);

    assert_eq!(pane.scroll_top(), 390.0);
    assert_eq!(doc.scroll_top(), 0.0);
    assert_eq!(row.first().unwrap().offset(), Pos2::new(0.0, 110.0));
}

#[test]
fn test_scroll_if_needed_skips_visible() {
    let (doc, pane) = pane_fixture();
    let options = ScrollOptions {
        if_needed: true,
        container: Some(".pane".to_string()),
        ..ScrollOptions::default()
    };

    let mut done = doc.select("#row-0").animate_into_view(&options);
    assert!(done.is_complete());
    assert_eq!(doc.pending_animations(), 0);
    assert_eq!(pane.scroll_top(), 0.0);

    let mut hidden = doc.select("#row-2").animate_into_view(&options);
    assert!(!hidden.is_complete());
    doc.run_animations();
    assert!(hidden.is_complete());
    assert_eq!(pane.scroll_top(), 800.0);
}

#[test]
fn test_scroll_falls_back_to_window() {
    let (doc, pane) = pane_fixture();
    let options = ScrollOptions {
        container: Some(".missing".to_string()),
        ..ScrollOptions::default()
    };
    let done = doc.select("#row-1").animate_into_view(&options);
    doc.run_animations();
    block_on(done);
    assert_eq!(doc.scroll_top(), 500.0);
    assert_eq!(pane.scroll_top(), 0.0);
}

#[test]
fn test_scroll_clamps_at_top() {
    let (doc, _) = pane_fixture();
    let options = ScrollOptions {
        margin: 1000.0,
        ..ScrollOptions::default()
    };
    let done = doc.select("#row-0").animate_into_view(&options);
    doc.run_animations();
    block_on(done);
    assert_eq!(doc.scroll_top(), 0.0);
}

#[test]
fn test_display() {
    let (doc, _) = pane_fixture();
    let rows = doc.select(".pane p");
    assert_eq!(rows.len(), 3);

    rows.display(None);
    assert!(rows
        .iter()
        .all(|row| row.style("display").as_deref() == Some("inline-block")));

    rows.display(Some("block"));
    assert_eq!(rows.get(2).unwrap().style("display").as_deref(), Some("block"));
}

#[test]
fn test_fade_out_remove() {
    let (doc, pane) = pane_fixture();
    let rows = doc.select("#row-0, #row-1");
    let mut done = rows.fade_out_remove(Duration::from_millis(100));

    assert!(!done.is_complete());
    assert!(rows.iter().all(|row| row.is_attached()));

    assert_eq!(doc.run_animations(), 2);
    assert!(done.is_complete());
    assert!(rows.iter().all(|row| !row.is_attached()));
    assert_eq!(pane.children().len(), 1);
    assert!(doc.get_element_by_id("row-0").is_none());
}

#[test]
fn test_slide_up_remove() {
    let (doc, pane) = pane_fixture();
    let done = doc.select("#row-2").slide_up_remove(Duration::from_millis(50));
    doc.run_animations();
    block_on(done);
    assert_eq!(pane.children().len(), 2);
    assert!(doc.select("#row-2").is_empty());
}

#[test]
fn test_outer_html() {
    init_logging();
    let doc = MemoryDocument::new();
    let p = doc.create_element("p");
    p.set_attr("class", "note");
    p.append_text("a & b");
    doc.body().append(&p);

    assert_eq!(
        doc.select("p.note").outer_html().as_deref(),
        Some(r#"<p class="note">a &amp; b</p>"#)
    );
    assert_eq!(doc.select("p.other").outer_html(), None);
}

#[test]
fn test_is_after_and_before() {
    init_logging();
    let doc = MemoryDocument::new();
    let list = doc.create_element("ul");
    doc.body().append(&list);
    for class in ["first", "middle", "last"] {
        let li = doc.create_element("li");
        li.set_attr("class", class);
        list.append(&li);
    }

    let middle = doc.select("li.middle");
    assert!(middle.is_after(".first"));
    assert!(middle.is_before(".last"));
    assert!(!middle.is_after(".last"));
    assert!(!doc.select("li.first").is_after("li"));
    assert!(!doc.select("li.last").is_before("li"));
    assert!(!doc.select("li.none").is_before("li"));
}

#[test]
fn test_offset_relative_to() {
    let (doc, pane) = pane_fixture();
    let row = doc.select("#row-1");

    assert_eq!(row.offset_relative_to(Some(".pane")), Some(Pos2::new(0.0, 400.0)));
    assert_eq!(row.offset_relative_to(None), Some(Pos2::new(0.0, 500.0)));
    assert_eq!(row.offset_relative_to(Some("section")), Some(Pos2::new(0.0, 500.0)));

    pane.set_scroll_top(100.0);
    assert_eq!(row.offset_relative_to(Some(".pane")), Some(Pos2::new(0.0, 300.0)));
    assert_eq!(doc.select("#missing").offset_relative_to(None), None);
}

#[test]
fn test_has_attr() {
    let (doc, _) = pane_fixture();
    let row = doc.select("#row-0");
    assert!(row.has_attr("id"));
    assert!(!row.has_attr("title"));

    row.set_attr("title", "");
    assert!(row.has_attr("title"));
}

#[test]
fn test_empty_selection_helpers() {
    let (doc, _) = pane_fixture();
    let nothing = doc.select("#missing");

    let mut scrolled = nothing.animate_into_view(&ScrollOptions::default());
    assert!(scrolled.is_complete());
    let mut removed = nothing.fade_out_remove(Duration::ZERO);
    assert!(removed.is_complete());
    assert_eq!(nothing.display(None).len(), 0);
    assert!(!nothing.has_attr("id"));
    assert_eq!(doc.pending_animations(), 0);
}

#[test]
fn test_find_descendants() {
    let (doc, _) = pane_fixture();
    let pane = doc.select(".pane");
    assert_eq!(pane.find("p").len(), 3);
    assert!(doc.select("#row-0").find("p").is_empty());
}
