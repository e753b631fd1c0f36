use std::collections::BTreeSet;

use hsk_core::preprocess::annotations;
use hsk_core::{Language, ParsedContent, WordEntry};

use crate::template::{Card, Deck, DeckTemplate, FieldValue};

/// One `hanzi, pinyin, definition` line per word
pub fn word_list(content: &ParsedContent, delimiter: &str) -> String {
    delimited(
        content
            .words
            .iter()
            .map(|w| [w.hanzi.as_str(), w.pinyin.as_str(), w.definition.as_str()]),
        delimiter,
    )
}

/// One `hanzi, pinyin, definition` line per sentence
pub fn sentence_list(content: &ParsedContent, delimiter: &str) -> String {
    delimited(
        content
            .sentences
            .iter()
            .map(|s| [s.hanzi.as_str(), s.pinyin.as_str(), s.definition.as_str()]),
        delimiter,
    )
}

fn delimited<'a>(rows: impl Iterator<Item = [&'a str; 3]>, delimiter: &str) -> String {
    let mut out = String::new();
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| clean_field(f, delimiter)).collect();
        out.push_str(&fields.join(delimiter));
        out.push('\n');
    }
    out
}

/// Fields may not contain the delimiter or a line break
fn clean_field(field: &str, delimiter: &str) -> String {
    let field = field.replace(['\r', '\n'], " ");
    if delimiter.is_empty() {
        field
    } else {
        field.replace(delimiter, " ")
    }
}

fn deck_name(content: &ParsedContent, label: &str) -> String {
    format!("HSK {} {}", content.hsk_level, label)
}

/// Headword as shown on word cards, annotations translated when known
pub fn display_hanzi(word: &WordEntry, language: Language) -> String {
    let mut hanzi = word.hanzi.clone();
    if hanzi == word.hanzi_raw {
        return hanzi;
    }

    for annotation in annotations(&word.hanzi) {
        if let Some(label) = language.annotation_label(&ascii_parens(annotation)) {
            hanzi = hanzi.replace(annotation, label);
        }
    }
    hanzi
}

/// Annotations with no label in `language`, deduplicated and sorted
pub fn unknown_annotations(content: &ParsedContent, language: Language) -> Vec<String> {
    let unknown: BTreeSet<String> = content
        .words
        .iter()
        .filter(|w| w.hanzi != w.hanzi_raw)
        .flat_map(|w| annotations(&w.hanzi))
        .filter(|a| language.annotation_label(&ascii_parens(a)).is_none())
        .map(str::to_string)
        .collect();
    unknown.into_iter().collect()
}

fn ascii_parens(annotation: &str) -> String {
    annotation.replace('（', "(").replace('）', ")")
}

/// One card per word, pinyin left to the flashcard app
pub fn word_deck_automatic(content: &ParsedContent, language: Language) -> Deck {
    let template = DeckTemplate::automatic(
        deck_name(content, language.word_list_label()),
        language,
    );
    let cards = content
        .words
        .iter()
        .map(|w| {
            Card::default()
                .with(&template, language.chinese_label(), FieldValue::Text(display_hanzi(w, language)))
                .with(&template, language.translation_label(), FieldValue::Text(w.definition.clone()))
        })
        .collect();

    Deck { template, cards }
}

/// One card per sentence, pinyin left to the flashcard app
pub fn sentence_deck_automatic(content: &ParsedContent, language: Language) -> Deck {
    let template = DeckTemplate::automatic(
        deck_name(content, language.sentences_label()),
        language,
    );
    let cards = content
        .sentences
        .iter()
        .map(|s| {
            Card::default()
                .with(&template, language.chinese_label(), FieldValue::Text(s.hanzi.clone()))
                .with(&template, language.translation_label(), FieldValue::Text(s.definition.clone()))
        })
        .collect();

    Deck { template, cards }
}

fn manual_card(template: &DeckTemplate, front: &str, back: &str, pinyin: &str) -> Card {
    Card::default()
        .with(template, "Front", FieldValue::Text(front.to_string()))
        .with(template, "Back", FieldValue::Text(back.to_string()))
        .with(template, "Pinyin", FieldValue::Italic(pinyin.to_string()))
}

/// Two cards per word, hanzi -> definition and definition -> hanzi,
/// both carrying the page's pinyin on the back
pub fn word_deck_manual(content: &ParsedContent, language: Language) -> Deck {
    let template = DeckTemplate::manual(deck_name(content, language.word_list_label()));
    let cards = content
        .words
        .iter()
        .flat_map(|w| {
            let hanzi = display_hanzi(w, language);
            [
                manual_card(&template, &hanzi, &w.definition, &w.pinyin),
                manual_card(&template, &w.definition, &hanzi, &w.pinyin),
            ]
        })
        .collect();

    Deck { template, cards }
}

/// One forward card per sentence with the page's pinyin on the back
pub fn sentence_deck_manual(content: &ParsedContent, language: Language) -> Deck {
    let template = DeckTemplate::manual(deck_name(content, language.sentences_label()));
    let cards = content
        .sentences
        .iter()
        .map(|s| manual_card(&template, &s.hanzi, &s.definition, &s.pinyin))
        .collect();

    Deck { template, cards }
}

#[cfg(test)]
mod tests {
    use hsk_core::SentenceEntry;

    use super::*;
    use crate::xml::render;

    fn word(id: u32, hanzi: &str, hanzi_raw: &str, pinyin: &str, definition: &str) -> WordEntry {
        WordEntry {
            id,
            hanzi: hanzi.to_string(),
            hanzi_raw: hanzi_raw.to_string(),
            pinyin: pinyin.to_string(),
            definition: definition.to_string(),
            ..WordEntry::default()
        }
    }

    fn content() -> ParsedContent {
        ParsedContent {
            words: vec![
                word(1, "月亮", "月亮", "yuè liang", "moon"),
                word(2, "得(助动词)", "得", "děi", "must\tneed"),
                word(3, "还(连词)", "还", "hái", "still"),
            ],
            sentences: vec![SentenceEntry {
                hanzi: "今天晚上的月亮很圆。".to_string(),
                pinyin: "Jīntiān wǎnshang de yuèliang hěn yuán.".to_string(),
                definition: "The moon is very round tonight.".to_string(),
            }],
            hsk_level: 3,
        }
    }

    #[test]
    fn list_lines_split_into_three_fields() {
        let content = content();
        let out = word_list(&content, "\t");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), content.words.len());
        for (line, w) in lines.iter().zip(&content.words) {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[0], w.hanzi);
            assert_eq!(fields[1], w.pinyin);
        }
        assert_eq!(lines[1], "得(助动词)\tděi\tmust need");
    }

    #[test]
    fn sentence_list_uses_custom_delimiter() {
        let out = sentence_list(&content(), " | ");
        assert_eq!(
            out,
            "今天晚上的月亮很圆。 | Jīntiān wǎnshang de yuèliang hěn yuán. | The moon is very round tonight.\n"
        );
    }

    #[test]
    fn automatic_word_deck_has_one_card_per_word() {
        let deck = word_deck_automatic(&content(), Language::English);
        assert_eq!(deck.cards.len(), 3);
        assert_eq!(deck.template.name, "HSK 3 Word List");

        let xml = render(&deck).unwrap();
        assert!(xml.contains(
            r#"<card><chinese name="Chinese">月亮</chinese><text name="Translation">moon</text></card>"#
        ));
    }

    #[test]
    fn annotations_are_translated_on_word_cards() {
        let content = content();
        assert_eq!(display_hanzi(&content.words[1], Language::English), "得(auxiliary verb)");
        assert_eq!(display_hanzi(&content.words[1], Language::French), "得(verbe auxiliaire)");
        // unknown annotations are left as written
        assert_eq!(display_hanzi(&content.words[2], Language::English), "还(连词)");
        assert_eq!(unknown_annotations(&content, Language::English), vec!["(连词)".to_string()]);
    }

    #[test]
    fn manual_word_deck_has_two_cards_per_word() {
        let content = content();
        let deck = word_deck_manual(&content, Language::French);
        assert_eq!(deck.cards.len(), 2 * content.words.len());
        assert_eq!(deck.template.name, "HSK 3 Vocabulaire");

        let xml = render(&deck).unwrap();
        assert!(xml.contains(
            r#"<card><text name="Front">月亮</text><text name="Back">moon</text><rich-text name="Pinyin"><i>yuè liang</i></rich-text></card>"#
        ));
        assert!(xml.contains(
            r#"<card><text name="Front">moon</text><text name="Back">月亮</text><rich-text name="Pinyin"><i>yuè liang</i></rich-text></card>"#
        ));
    }

    #[test]
    fn sentence_decks_are_forward_only() {
        let content = content();
        assert_eq!(sentence_deck_manual(&content, Language::English).cards.len(), 1);

        let deck = sentence_deck_automatic(&content, Language::French);
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.template.name, "HSK 3 Phrases");
    }

    #[test]
    fn output_is_deterministic() {
        let content = content();
        let first = render(&word_deck_manual(&content, Language::English)).unwrap();
        let second = render(&word_deck_manual(&content, Language::English)).unwrap();
        assert_eq!(first, second);
    }
}
