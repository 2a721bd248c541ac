//! End-to-end: source → extractor → controller → markup host

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::{Duration, Instant};

use wordbook_core::services::{BookInput, BookKey, InputOutcome, NavControl};
use wordbook_core::types::{ContentBlock, Locale, Side, Spread, SpreadView};
use wordbook_core::{
    BookConfig, BookController, ContentSource, CoverPolicy, Extractor, MarkupSurfaces, SurfaceId,
};

fn scenario_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::heading(2, "Spread 1"),
        ContentBlock::paragraph("[메모: 연습]"),
        ContentBlock::table([vec!["cat", "캣"], vec!["dog", "더그", "덕"]]),
    ]
}

#[test]
fn memo_scenario_renders_two_rows_and_eight_padding_rows() {
    let config = BookConfig::default();
    let spreads = Extractor::new(&config).from_blocks(&scenario_blocks());
    assert_eq!(spreads.len(), 2);
    assert!(spreads[0].is_cover());

    let mut book = BookController::new(spreads, &config);
    let mut host = MarkupSurfaces::new(Locale::Ko);
    assert!(book.open_book(1, &mut host, Vec::new));

    let grid = host.content(SurfaceId::WordList);
    assert_eq!(grid.matches(r#"class="word-row""#).count(), 2);
    assert_eq!(grid.matches(r#"class="word-row empty""#).count(), 8);
    assert!(grid.contains(r#"<span class="word-number">1</span><span class="headword">cat</span>"#));
    assert!(grid.contains(r#"<span class="word-number">2</span><span class="headword">dog</span>"#));
    assert_eq!(grid.matches("attempt later").count(), 1);

    assert_eq!(host.content(SurfaceId::Memo), "연습");
    assert_eq!(host.content(SurfaceId::Photo), "사진 삽입 영역");
    assert_eq!(host.content(SurfaceId::PageNumber(Side::Left)), "1");
    assert_eq!(host.content(SurfaceId::PageNumber(Side::Right)), "2");
    assert_eq!(host.is_visible(SurfaceId::CoverLayer(Side::Left)), Some(false));
    assert_eq!(host.is_visible(SurfaceId::ContentLayer(Side::Right)), Some(true));
    assert_eq!(host.is_enabled(SurfaceId::PrevControl), Some(true));
    assert_eq!(host.is_enabled(SurfaceId::NextControl), Some(false));
    assert_eq!(host.history(), ["book"]);
}

#[test]
fn composed_view_matches_scenario() {
    let config = BookConfig::default();
    let book = BookController::new(
        Extractor::new(&config).from_blocks(&scenario_blocks()),
        &config,
    );
    let spread = &book.state().spreads()[1];
    let SpreadView::Content(view) = book.renderer().compose(spread, 1, true) else {
        panic!("expected content view");
    };
    assert_eq!(view.start_number, 1);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows.iter().filter(|row| row.is_empty()).count(), 8);
}

#[test]
fn held_arrow_key_commits_once() {
    let config = BookConfig::default();
    let source = ContentSource::from_json_str(
        r#"[{ "type": "cover", "prologue": "hi" }, { "id": 1 }, { "id": 2 }, { "id": 3 }]"#,
    );
    let mut book = BookController::new(Extractor::new(&config).extract(&source), &config);
    let mut host = MarkupSurfaces::new(Locale::Ko);
    book.open_book(0, &mut host, Vec::new);

    let start = Instant::now();
    for step in 0..5u64 {
        let now = start + Duration::from_millis(step * 10);
        assert_eq!(
            book.dispatch(BookInput::Key(BookKey::ArrowRight), now, &mut host),
            InputOutcome::Queued
        );
        assert!(!book.poll(now, &mut host));
    }
    // 每次都是 current+1，所以只前进一页
    assert!(book.poll(start + Duration::from_millis(90), &mut host));
    assert_eq!(book.state().current_index(), 1);

    book.dispatch(BookInput::Control(NavControl::Next), start, &mut host);
    book.dispatch(BookInput::Key(BookKey::End), start, &mut host);
    assert!(book.poll(start + Duration::from_millis(50), &mut host));
    assert_eq!(book.state().current_index(), 3);
    assert_eq!(host.content(SurfaceId::PageNumber(Side::Left)), "5");
}

#[test]
fn boundary_clamp_keeps_index() {
    let config = BookConfig::default();
    let spreads = Extractor::new(&config).from_json_str(r#"[{ "id": 1 }, { "id": 2 }]"#);
    let mut book = BookController::new(spreads, &config);
    let mut host = MarkupSurfaces::new(Locale::Ko);

    assert!(!book.commit(-1, &mut host));
    assert!(!book.commit(2, &mut host));
    assert_eq!(book.state().current_index(), 0);
    assert!(!book.state().is_transitioning());
    assert!(host.is_untouched());
}

#[test]
fn empty_source_is_nothing_to_render() {
    let config = BookConfig::default();
    let spreads = Extractor::new(&config).extract(&ContentSource::from_json_str("not json"));
    assert!(spreads.is_empty());

    let mut book = BookController::new(spreads, &config);
    let mut host = MarkupSurfaces::new(Locale::Ko);
    let now = Instant::now();

    assert!(!book.request_navigate(1, now));
    assert!(!book.poll(now + Duration::from_secs(1), &mut host));
    assert!(!book.open_book(0, &mut host, Vec::new));
    assert_eq!(
        book.dispatch(BookInput::Key(BookKey::ArrowRight), now, &mut host),
        InputOutcome::Ignored
    );
    assert_eq!(book.state().total(), 0);
    assert!(host.is_untouched());
}

#[test]
fn overflowing_spread_renders_every_word() {
    let words: Vec<String> = (1..=12)
        .map(|n| format!(r#"{{ "headword": "w{n}", "firstAttempt": "a" }}"#))
        .collect();
    let json = format!(r#"[{{ "id": 1, "words": [{}] }}]"#, words.join(","));

    let config = BookConfig {
        cover: CoverPolicy::None,
        ..BookConfig::default()
    };
    let mut book = BookController::new(Extractor::new(&config).from_json_str(&json), &config);
    let mut host = MarkupSurfaces::new(Locale::En);
    book.open_book(0, &mut host, Vec::new);

    let grid = host.content(SurfaceId::WordList);
    assert_eq!(grid.matches(r#"class="word-row""#).count(), 12);
    assert!(!grid.contains("empty"));
}

#[test]
fn user_text_is_escaped_in_markup_surfaces() {
    let config = BookConfig {
        cover: CoverPolicy::None,
        ..BookConfig::default()
    };
    let spreads = Extractor::new(&config).from_blocks(&[
        ContentBlock::heading(2, "S"),
        ContentBlock::paragraph("[memo: <b>bold</b>] [photo: a&b]"),
        ContentBlock::table([["<script>", "\"x\""]]),
    ]);
    let mut book = BookController::new(spreads, &config);
    let mut host = MarkupSurfaces::new(Locale::En);
    book.open_book(0, &mut host, Vec::new);

    assert_eq!(host.content(SurfaceId::Memo), "&lt;b&gt;bold&lt;/b&gt;");
    assert_eq!(host.content(SurfaceId::Photo), "Photo: a&amp;b");
    let grid = host.content(SurfaceId::WordList);
    assert!(grid.contains("&lt;script&gt;"));
    assert!(grid.contains("&quot;x&quot;"));
    assert!(!grid.contains("<script>"));
}

#[test]
fn escape_returns_to_list_and_reopen_keeps_single_history_entry_per_entry() {
    let config = BookConfig::default();
    let spreads = Extractor::new(&config).from_blocks(&scenario_blocks());
    let mut book = BookController::new(spreads, &config);
    let mut host = MarkupSurfaces::new(Locale::Ko);

    book.open_book(0, &mut host, Vec::new);
    assert_eq!(host.content(SurfaceId::Prologue), "");
    assert_eq!(host.content(SurfaceId::PageNumber(Side::Left)), "");

    let outcome = book.dispatch(BookInput::Key(BookKey::Escape), Instant::now(), &mut host);
    assert_eq!(outcome, InputOutcome::Closed);
    assert_eq!(host.is_visible(SurfaceId::Book), Some(false));

    book.open_book(1, &mut host, Vec::new);
    assert_eq!(host.history().len(), 2);
    assert!(matches!(book.state().current_spread(), Some(Spread::Content(_))));
}
