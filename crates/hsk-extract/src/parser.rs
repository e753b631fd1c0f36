use std::sync::LazyLock;

use hsk_config::template::TemplateConfig;
use hsk_core::{ParsedContent, SentenceEntry};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use regex::Regex;

use crate::embedded::{self, EmbeddedContent};
use crate::error::ParseError;
use crate::ids::{PendingWord, assign_ids};
use crate::signals::SignalTable;
use crate::zone::{EntryBuilder, EntryKind, FieldKind, Signal, Zone};

static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"HSK\s*([1-9])").unwrap());

const LINK_ATTRIBUTES: [&str; 3] = ["href", "src", "data-src"];

/// Extracts HSK words and sentences from one saved vocabulary page
pub struct HskPageParser {
    signals: SignalTable,
    content: Option<ParsedContent>,
}

impl HskPageParser {
    pub fn new(template: &TemplateConfig) -> Self {
        Self {
            signals: SignalTable::new(template),
            content: None,
        }
    }

    /// Scan a complete document. An instance accepts exactly one document.
    pub fn feed(&mut self, html: &str) -> Result<(), ParseError> {
        if self.content.is_some() {
            return Err(ParseError::AlreadyFed);
        }

        let content = Scan::new(&self.signals).run(html)?;

        if content.is_empty() {
            tracing::warn!("No word or sentence blocks found, is this an HSK vocabulary page?");
        } else {
            tracing::info!(
                "Parsed HSK {} page: {} words, {} sentences",
                content.hsk_level,
                content.words.len(),
                content.sentences.len()
            );
        }

        self.content = Some(content);
        Ok(())
    }

    /// Parsed content, once `feed` succeeded
    pub fn content(&self) -> Option<&ParsedContent> {
        self.content.as_ref()
    }

    pub fn into_content(self) -> Option<ParsedContent> {
        self.content
    }
}

/// Parse a page in one call
pub fn parse_page(html: &str, template: &TemplateConfig) -> Result<ParsedContent, ParseError> {
    let mut parser = HskPageParser::new(template);
    parser.feed(html)?;
    Ok(parser.into_content().unwrap_or_default())
}

/// Elements that never have content or an end tag
fn is_void(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose end tag may be left out
fn has_optional_end(name: &str) -> bool {
    matches!(
        name,
        "p" | "li" | "dt" | "dd" | "option" | "tr" | "td" | "th" | "thead" | "tbody"
    )
}

fn is_inline(name: &str) -> bool {
    matches!(
        name,
        "a" | "abbr"
            | "b"
            | "bdi"
            | "bdo"
            | "cite"
            | "code"
            | "dfn"
            | "em"
            | "font"
            | "i"
            | "kbd"
            | "mark"
            | "q"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "u"
            | "var"
    )
}

/// Whether a start tag of `incoming` ends the open element `open`
fn ends_on_start(open: &str, incoming: &str) -> bool {
    match open {
        "p" => matches!(
            incoming,
            "address"
                | "article"
                | "aside"
                | "blockquote"
                | "details"
                | "div"
                | "dl"
                | "dd"
                | "dt"
                | "fieldset"
                | "figcaption"
                | "figure"
                | "footer"
                | "form"
                | "h1"
                | "h2"
                | "h3"
                | "h4"
                | "h5"
                | "h6"
                | "header"
                | "hr"
                | "li"
                | "main"
                | "nav"
                | "ol"
                | "p"
                | "pre"
                | "section"
                | "table"
                | "ul"
        ),
        "li" => incoming == "li",
        "dt" | "dd" => matches!(incoming, "dt" | "dd"),
        "option" => matches!(incoming, "option" | "optgroup"),
        "tr" => incoming == "tr",
        "td" | "th" => matches!(incoming, "td" | "th" | "tr"),
        "thead" | "tbody" => matches!(incoming, "tbody" | "tfoot"),
        _ => false,
    }
}

struct OpenElement {
    name: String,
    signal: Option<Signal>,
    level: bool,
}

/// Body of an element the tokenizer reads as raw text
enum RawBody {
    Script(String),
    Ignored,
}

/// State of a single left-to-right pass, fed by the HTML tokenizer
struct Scan<'a> {
    signals: &'a SignalTable,
    zone: Zone,
    stack: Vec<OpenElement>,
    builder: Option<EntryBuilder>,
    words: Vec<PendingWord>,
    sentences: Vec<SentenceEntry>,
    level_depth: usize,
    level_text: String,
    hsk_level: Option<u8>,
    raw: Option<RawBody>,
    scripts: Vec<String>,
    error: Option<ParseError>,
}

impl<'a> Scan<'a> {
    fn new(signals: &'a SignalTable) -> Self {
        Self {
            signals,
            zone: Zone::Outside,
            stack: Vec::new(),
            builder: None,
            words: Vec::new(),
            sentences: Vec::new(),
            level_depth: 0,
            level_text: String::new(),
            hsk_level: None,
            raw: None,
            scripts: Vec::new(),
            error: None,
        }
    }

    fn run(self, html: &str) -> Result<ParsedContent, ParseError> {
        let mut queue = BufferQueue::new();
        queue.push_back(StrTendril::from_slice(html));

        let mut tokenizer = Tokenizer::new(self, TokenizerOpts::default());
        let _ = tokenizer.feed(&mut queue);
        tokenizer.end();

        tokenizer.sink.finish()
    }

    fn on_start(&mut self, tag: &Tag, line: u64) -> Result<TokenSinkResult<()>, ParseError> {
        let name: &str = &tag.name;

        match name {
            "script" => {
                self.raw = Some(RawBody::Script(String::new()));
                return Ok(TokenSinkResult::RawData(RawKind::ScriptData));
            }
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                self.raw = Some(RawBody::Ignored);
                return Ok(TokenSinkResult::RawData(RawKind::Rawtext));
            }
            _ => {}
        }

        while let Some(index) = self.implied_end(name) {
            while self.stack.len() > index {
                self.pop(line)?;
            }
        }

        let container = !is_void(name) && !tag.self_closing;

        let mut class = "";
        let mut id = None;
        let mut links = Vec::new();
        for attr in &tag.attrs {
            let key: &str = &attr.name.local;
            if key == "class" {
                class = &*attr.value;
            } else if key == self.signals.id_attribute() {
                id = attr.value.trim().parse::<u32>().ok();
            } else if LINK_ATTRIBUTES.contains(&key) {
                links.push(&*attr.value);
            }
        }

        let mut signal = None;
        if container {
            if let Some(candidate) = self.signals.classify(class) {
                if let Some(next) = self.zone.open(candidate, line)? {
                    if let Signal::Entry(kind) = candidate {
                        self.builder = Some(EntryBuilder::new(kind, id));
                    }
                    self.zone = next;
                    signal = Some(candidate);
                }
            }
        }

        if let (Zone::InField(EntryKind::Word, FieldKind::Audio), Some(builder)) =
            (self.zone, self.builder.as_mut())
        {
            for link in links {
                builder.push_audio_link(link);
            }
        }

        if container {
            let level = matches!(name, "title" | "h1") || self.signals.is_level_class(class);
            if level {
                self.level_depth += 1;
            }
            self.stack.push(OpenElement {
                name: name.to_string(),
                signal,
                level,
            });
        }

        if matches!(name, "title" | "textarea") {
            return Ok(TokenSinkResult::RawData(RawKind::Rcdata));
        }
        Ok(TokenSinkResult::Continue)
    }

    /// Stack index of the element a start tag of `incoming` ends, looking past inline elements
    fn implied_end(&self, incoming: &str) -> Option<usize> {
        for (index, el) in self.stack.iter().enumerate().rev() {
            if ends_on_start(&el.name, incoming) {
                return Some(index);
            }
            if !is_inline(&el.name) {
                return None;
            }
        }
        None
    }

    fn on_end(&mut self, name: &str, line: u64) -> Result<(), ParseError> {
        if let Some(raw) = self.raw.take() {
            if let RawBody::Script(body) = raw {
                self.scripts.push(body);
            }
            return Ok(());
        }

        // end tags with nothing to close are dropped, as browsers do
        let Some(index) = self.stack.iter().rposition(|el| el.name == name) else {
            return Ok(());
        };

        // elements left open inside are closed implicitly
        while self.stack.len() > index {
            self.pop(line)?;
        }

        Ok(())
    }

    fn pop(&mut self, line: u64) -> Result<(), ParseError> {
        let Some(el) = self.stack.pop() else {
            return Ok(());
        };

        if el.level {
            self.level_depth -= 1;
            self.read_level();
        }
        if let Some(signal) = el.signal {
            self.close_zone(signal, line)?;
        }

        Ok(())
    }

    fn close_zone(&mut self, signal: Signal, line: u64) -> Result<(), ParseError> {
        self.zone = self.zone.close(signal, line)?;

        if let Signal::Entry(kind) = signal {
            let builder = self
                .builder
                .take()
                .ok_or_else(|| ParseError::UnexpectedClose {
                    what: signal.to_string(),
                    line,
                })?;
            self.commit(kind, builder);
        }

        Ok(())
    }

    fn commit(&mut self, kind: EntryKind, builder: EntryBuilder) {
        match kind {
            EntryKind::Word => {
                let pending = builder.into_word();
                tracing::debug!(
                    "word {:?}: {} [{}]",
                    pending.id,
                    pending.word.hanzi,
                    pending.word.pinyin
                );
                self.words.push(pending);
            }
            EntryKind::Sentence => {
                let sentence = builder.into_sentence();
                tracing::debug!("sentence: {}", sentence.hanzi);
                self.sentences.push(sentence);
            }
        }
    }

    fn on_text(&mut self, text: &str) {
        match &mut self.raw {
            Some(RawBody::Script(body)) => {
                body.push_str(text);
                return;
            }
            Some(RawBody::Ignored) => return,
            None => {}
        }

        if let (Zone::InField(_, field), Some(builder)) = (self.zone, self.builder.as_mut()) {
            builder.push_text(field, text);
        }

        if self.level_depth > 0 && self.hsk_level.is_none() {
            self.level_text.push_str(text);
        }
    }

    /// Text of a level heading is matched once the heading closes
    fn read_level(&mut self) {
        if self.hsk_level.is_none() {
            self.hsk_level = LEVEL_RE
                .captures(&self.level_text)
                .and_then(|caps| caps[1].parse().ok());
        }
        self.level_text.clear();
    }

    /// Close what a document may leave open, then settle ids and the level
    fn finish(mut self) -> Result<ParsedContent, ParseError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        while self
            .stack
            .last()
            .is_some_and(|el| el.signal.is_none() || has_optional_end(&el.name))
        {
            self.pop(0)?;
        }

        if let Some(builder) = &self.builder {
            return Err(ParseError::UnclosedEntry { kind: builder.kind });
        }

        if self.level_depth > 0 {
            self.read_level();
        }

        let mut embedded = EmbeddedContent::default();
        for script in &self.scripts {
            if let Some(found) = embedded::decode(script)? {
                embedded = found;
                break;
            }
        }

        let hsk_level = self.hsk_level.or(embedded.hsk_level).unwrap_or_else(|| {
            tracing::warn!("HSK level not found on page, using 0");
            0
        });

        if self.words.is_empty() && self.sentences.is_empty() && !embedded.words.is_empty() {
            tracing::info!("Using embedded page state, no card markup found");
            return Ok(ParsedContent {
                words: embedded.words,
                sentences: embedded.sentences,
                hsk_level,
            });
        }

        Ok(ParsedContent {
            words: assign_ids(self.words)?,
            sentences: self.sentences,
            hsk_level,
        })
    }
}

impl TokenSink for Scan<'_> {
    type Handle = ();

    fn process_token(&mut self, token: Token, line: u64) -> TokenSinkResult<()> {
        // the first structural error ends the scan
        if self.error.is_some() {
            return TokenSinkResult::Continue;
        }

        let result = match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => self.on_start(&tag, line),
                TagKind::EndTag => self
                    .on_end(&tag.name, line)
                    .map(|()| TokenSinkResult::Continue),
            },
            Token::CharacterTokens(text) => {
                self.on_text(&text);
                Ok(TokenSinkResult::Continue)
            }
            _ => Ok(TokenSinkResult::Continue),
        };

        result.unwrap_or_else(|err| {
            self.error = Some(err);
            TokenSinkResult::Continue
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_end_at_block_starts() {
        assert!(ends_on_start("p", "div"));
        assert!(ends_on_start("p", "p"));
        assert!(!ends_on_start("p", "span"));
        assert!(ends_on_start("li", "li"));
        assert!(!ends_on_start("li", "p"));
        assert!(ends_on_start("td", "tr"));
    }

    #[test]
    fn inline_elements_do_not_block_implied_ends() {
        let signals = SignalTable::new(&TemplateConfig::default());
        let mut scan = Scan::new(&signals);
        for name in ["ul", "li", "span"] {
            scan.stack.push(OpenElement {
                name: name.to_string(),
                signal: None,
                level: false,
            });
        }

        assert_eq!(scan.implied_end("li"), Some(1));
        assert_eq!(scan.implied_end("span"), None);
    }

    #[test]
    fn void_elements_have_no_content() {
        assert!(is_void("br"));
        assert!(is_void("source"));
        assert!(!is_void("audio"));
    }
}
