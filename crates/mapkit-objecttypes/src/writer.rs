//! Writes object type catalogs as XML.

use crate::error::{ObjectTypesError, ObjectTypesResult};
use crate::model::ObjectType;
use mapkit_core::Properties;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writer for object type catalog files.
///
/// On failure the message stays available from
/// [`ObjectTypesWriter::error_string`] until the next write.
#[derive(Debug, Default)]
pub struct ObjectTypesWriter {
    error: String,
}

impl ObjectTypesWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `object_types` to `path`, replacing any existing file.
    pub fn write_object_types(
        &mut self,
        path: impl AsRef<Path>,
        object_types: &[ObjectType],
    ) -> ObjectTypesResult<()> {
        self.error.clear();
        let path = path.as_ref();

        let result = File::create(path)
            .map_err(ObjectTypesError::OpenForWriting)
            .and_then(|file| write_document(BufWriter::new(file), object_types));

        match result {
            Ok(()) => {
                info!(path = %path.display(), count = object_types.len(), "Saved object types");
                Ok(())
            }
            Err(err) => {
                self.error = err.to_string();
                Err(err)
            }
        }
    }

    /// Serializes `object_types` into a string.
    pub fn write_to_string(&mut self, object_types: &[ObjectType]) -> ObjectTypesResult<String> {
        self.error.clear();
        let mut buffer = Vec::new();
        if let Err(err) = write_document(&mut buffer, object_types) {
            self.error = err.to_string();
            return Err(err);
        }
        String::from_utf8(buffer).map_err(|err| {
            let err = ObjectTypesError::WriteFault(err.to_string());
            self.error = err.to_string();
            err
        })
    }

    /// Message of the last failed write; empty after a successful one.
    pub fn error_string(&self) -> &str {
        &self.error
    }
}

fn fault(err: impl std::fmt::Display) -> ObjectTypesError {
    ObjectTypesError::WriteFault(err.to_string())
}

fn write_document<W: Write>(sink: W, object_types: &[ObjectType]) -> ObjectTypesResult<()> {
    let mut writer = Writer::new_with_indent(sink, b' ', 1);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(fault)?;
    writer
        .write_event(Event::Start(BytesStart::new("objecttypes")))
        .map_err(fault)?;

    for object_type in object_types {
        let mut element = BytesStart::new("objecttype");
        element.push_attribute(("name", object_type.name.as_str()));
        element.push_attribute(("color", object_type.color.name().as_str()));

        if object_type.properties.is_empty() {
            writer.write_event(Event::Empty(element)).map_err(fault)?;
        } else {
            writer.write_event(Event::Start(element)).map_err(fault)?;
            write_properties(&mut writer, &object_type.properties)?;
            writer
                .write_event(Event::End(BytesEnd::new("objecttype")))
                .map_err(fault)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("objecttypes")))
        .map_err(fault)?;

    let sink = writer.get_mut();
    sink.write_all(b"\n").map_err(fault)?;
    sink.flush().map_err(fault)?;
    Ok(())
}

fn write_properties<W: Write>(
    writer: &mut Writer<W>,
    properties: &Properties,
) -> ObjectTypesResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new("properties")))
        .map_err(fault)?;

    for (name, value) in properties {
        let mut element = BytesStart::new("property");
        element.push_attribute(("name", name.as_str()));

        // Attribute values cannot carry line breaks through normalization.
        if value.contains('\n') {
            writer.write_event(Event::Start(element)).map_err(fault)?;
            writer
                .write_event(Event::Text(BytesText::new(value)))
                .map_err(fault)?;
            writer
                .write_event(Event::End(BytesEnd::new("property")))
                .map_err(fault)?;
        } else {
            element.push_attribute(("value", value.as_str()));
            writer.write_event(Event::Empty(element)).map_err(fault)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("properties")))
        .map_err(fault)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_core::Color;

    #[test]
    fn test_writes_expected_document() {
        let types = vec![
            ObjectType::new("enemy", Color::rgb(255, 0, 0)).with_property("hp", "10"),
            ObjectType::new("chest", Color::rgb(0, 0, 255)),
        ];

        let xml = ObjectTypesWriter::new().write_to_string(&types).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<objecttype name=\"enemy\" color=\"#ff0000\">"));
        assert!(xml.contains("<property name=\"hp\" value=\"10\"/>"));
        assert!(xml.contains("<objecttype name=\"chest\" color=\"#0000ff\"/>"));
        assert!(xml.trim_end().ends_with("</objecttypes>"));
    }

    #[test]
    fn test_multiline_value_written_as_text() {
        let types =
            vec![ObjectType::new("npc", Color::default()).with_property("dialog", "hi\nthere")];

        let xml = ObjectTypesWriter::new().write_to_string(&types).unwrap();

        assert!(xml.contains("<property name=\"dialog\">hi\nthere</property>"));
        assert!(!xml.contains("value="));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let types = vec![ObjectType::new("a&b", Color::default()).with_property("k", "<\"x\">")];
        let xml = ObjectTypesWriter::new().write_to_string(&types).unwrap();
        assert!(xml.contains("name=\"a&amp;b\""));
        assert!(!xml.contains("<\"x\">"));
    }

    #[test]
    fn test_empty_catalog() {
        let xml = ObjectTypesWriter::new().write_to_string(&[]).unwrap();
        assert!(xml.contains("<objecttypes>"));
        assert!(xml.contains("</objecttypes>"));
    }
}
