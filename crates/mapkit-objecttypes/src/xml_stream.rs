//! Pull-style cursor over an XML document.
//!
//! Wraps `quick_xml::Reader` with the small set of navigation primitives the
//! catalog reader needs: step to the next child start tag, skip the rest of
//! the current element, and remember the first error with its position.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    /// Attribute value, or an empty string when the attribute is absent.
    pub fn attribute(&self, name: &str) -> &str {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map_or("", |(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Start(StartTag),
    End,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StreamError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

pub(crate) struct XmlStream<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    depth: usize,
    at_end: bool,
    error: Option<StreamError>,
}

impl<'a> XmlStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;

        Self {
            source,
            reader,
            depth: 0,
            at_end: false,
            error: None,
        }
    }

    /// Next start tag, end tag or text run. `None` at end of input or after an error.
    pub fn read_next(&mut self) -> Option<Token> {
        if self.error.is_some() || self.at_end {
            return None;
        }

        loop {
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    return match start_tag(&e) {
                        Ok(tag) => {
                            self.depth += 1;
                            Some(Token::Start(tag))
                        }
                        Err(message) => {
                            self.fail(message);
                            None
                        }
                    };
                }
                Ok(Event::End(_)) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Some(Token::End);
                }
                Ok(Event::Text(e)) => {
                    return match e.unescape() {
                        Ok(text) => Some(Token::Text(text.into_owned())),
                        Err(err) => {
                            self.fail(err.to_string());
                            None
                        }
                    };
                }
                Ok(Event::CData(e)) => {
                    return Some(Token::Text(String::from_utf8_lossy(&e).into_owned()));
                }
                Ok(Event::Eof) => {
                    self.at_end = true;
                    if self.depth > 0 {
                        self.fail("Premature end of document.".to_string());
                    }
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    self.fail(err.to_string());
                    return None;
                }
            }
        }
    }

    /// Advances to the next child start tag of the current element.
    ///
    /// Returns `None` when the current element ends, at end of input, or on error.
    pub fn read_next_start_element(&mut self) -> Option<StartTag> {
        while let Some(token) = self.read_next() {
            match token {
                Token::Start(tag) => return Some(tag),
                Token::End => return None,
                Token::Text(_) => {}
            }
        }
        None
    }

    /// Consumes everything up to and including the end tag of the current element.
    pub fn skip_current_element(&mut self) {
        let mut depth = 1usize;
        while let Some(token) = self.read_next() {
            match token {
                Token::Start(_) => depth += 1,
                Token::End => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                Token::Text(_) => {}
            }
        }
    }

    /// 1-based line and column of the reader's current position.
    pub fn position(&self) -> (usize, usize) {
        line_column(self.source, self.reader.buffer_position() as usize)
    }

    pub fn take_error(&mut self) -> Option<StreamError> {
        self.error.take()
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            let (line, column) = self.position();
            self.error = Some(StreamError {
                message,
                line,
                column,
            });
        }
    }
}

fn start_tag(e: &BytesStart<'_>) -> Result<StartTag, String> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(StartTag { name, attributes })
}

/// Converts a byte offset into a 1-based (line, column) pair. Columns count characters.
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source.as_bytes()[..offset.min(source.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
    (line, column)
}
