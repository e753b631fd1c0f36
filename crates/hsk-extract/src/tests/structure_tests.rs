//! Malformed zone nesting is fatal

use hsk_config::template::TemplateConfig;

use crate::{EntryKind, FieldKind, ParseError, parse_page};

#[test]
fn test_nested_word_blocks_fail() {
    let html = r#"<div class="word-card"><span class="hanzi">爱</span>
        <div class="word-card"><span class="hanzi">八</span></div></div>"#;
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ParseError::NestedEntry {
            kind: EntryKind::Word,
            ..
        }
    ));
}

#[test]
fn test_sentence_inside_word_fails() {
    let html = r#"<div class="word-card"><div class="sentence-card"></div></div>"#;
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ParseError::NestedEntry {
            kind: EntryKind::Sentence,
            ..
        }
    ));
}

#[test]
fn test_nested_fields_fail() {
    let html = r#"<div class="word-card"><div class="hanzi">爱<span class="pinyin">ài</span></div></div>"#;
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ParseError::NestedField {
            field: FieldKind::Pinyin,
            ..
        }
    ));
}

#[test]
fn test_truncated_page_fails() {
    let html = r#"<div class="sentence-card"><p class="hanzi">我爱你"#;
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnclosedEntry {
            kind: EntryKind::Sentence
        }
    ));
}

#[test]
fn test_duplicate_ids_fail() {
    let html = r#"<div class="word-card" data-id="4"></div><div class="word-card" data-id="4"></div>"#;
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(err, ParseError::DuplicateId(4)));
}

#[test]
fn test_implicitly_closed_field_still_commits() {
    // the <p> is never closed; closing the card closes it too
    let html = r#"<div class="word-card"><p class="definition">love</div>"#;
    let content = parse_page(html, &TemplateConfig::default()).unwrap();

    assert_eq!(content.words.len(), 1);
    assert_eq!(content.words[0].definition, "love");
}

#[test]
fn test_list_items_end_without_closing_tags() {
    let html = r#"<ul>
        <li class="word-card" data-id="1"><span class="hanzi">爱</span><span class="pinyin">ài</span>
        <li class="word-card" data-id="2"><span class="hanzi">八</span><span class="pinyin">bā</span>
        </ul>"#;
    let content = parse_page(html, &TemplateConfig::default()).unwrap();

    assert_eq!(content.words.len(), 2);
    assert_eq!(content.words[0].pinyin, "ài");
    assert_eq!(content.words[1].hanzi, "八");
}

#[test]
fn test_paragraph_fields_end_at_next_paragraph() {
    let html = r#"<div class="word-card"><p class="hanzi">爱<p class="pinyin">ài<p class="definition">to love</div>"#;
    let content = parse_page(html, &TemplateConfig::default()).unwrap();

    let word = &content.words[0];
    assert_eq!(word.hanzi, "爱");
    assert_eq!(word.pinyin, "ài");
    assert_eq!(word.definition, "to love");
}

#[test]
fn test_open_list_item_at_end_of_document_commits() {
    let html = r#"<ul><li class="word-card"><span class="hanzi">爱</span>"#;
    let content = parse_page(html, &TemplateConfig::default()).unwrap();

    assert_eq!(content.words.len(), 1);
}

#[test]
fn test_errors_report_line() {
    let html = "<div class=\"word-card\">\n<span class=\"hanzi\">\n<span class=\"pinyin\">ài</span></span></div>";
    let err = parse_page(html, &TemplateConfig::default()).unwrap_err();

    assert!(matches!(err, ParseError::NestedField { line: 3, .. }));
}

#[test]
fn test_stray_closing_tags_are_ignored() {
    let html = r#"</span></div><div class="word-card"><span class="hanzi">爱</span></div></li>"#;
    let content = parse_page(html, &TemplateConfig::default()).unwrap();

    assert_eq!(content.words.len(), 1);
}
