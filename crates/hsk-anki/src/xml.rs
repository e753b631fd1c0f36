use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::DeckError;
use crate::template::{Deck, FieldValue};

/// Serialize a deck as `<deck><fields/><cards/></deck>` markup
pub fn render(deck: &Deck) -> Result<String, DeckError> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Start(
        BytesStart::new("deck").with_attributes([("name", deck.template.name.as_str())]),
    ))?;

    writer.write_event(Event::Start(BytesStart::new("fields")))?;
    for spec in &deck.template.fields {
        let mut field = BytesStart::new(spec.kind.as_str());
        field.push_attribute(("name", spec.name.as_str()));
        field.push_attribute(("sides", spec.sides.as_str()));
        if let Some(lang) = &spec.lang {
            field.push_attribute(("lang", lang.as_str()));
        }
        if let Some(mode) = &spec.pinyin_mode {
            field.push_attribute(("pinyinMode", mode.as_str()));
        }
        writer.write_event(Event::Empty(field))?;
    }
    writer.write_event(Event::End(BytesEnd::new("fields")))?;

    writer.write_event(Event::Start(BytesStart::new("cards")))?;
    for card in &deck.cards {
        writer.write_event(Event::Start(BytesStart::new("card")))?;
        for field in &card.fields {
            writer.write_event(Event::Start(
                BytesStart::new(field.kind.as_str()).with_attributes([("name", field.name.as_str())]),
            ))?;
            match &field.value {
                FieldValue::Text(text) => {
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                }
                FieldValue::Italic(text) => {
                    writer.write_event(Event::Start(BytesStart::new("i")))?;
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                    writer.write_event(Event::End(BytesEnd::new("i")))?;
                }
            }
            writer.write_event(Event::End(BytesEnd::new(field.kind.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new("card")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("cards")))?;

    writer.write_event(Event::End(BytesEnd::new("deck")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| DeckError::Encoding(e.to_string()))
}
