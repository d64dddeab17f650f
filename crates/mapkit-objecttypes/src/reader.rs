//! Reads object type catalogs from XML.
//!
//! ```xml
//! <objecttypes>
//!  <objecttype name="enemy" color="#ff0000">
//!   <properties>
//!    <property name="hp" value="10"/>
//!    <property name="dialog">line one
//! line two</property>
//!   </properties>
//!  </objecttype>
//! </objecttypes>
//! ```

use crate::error::ObjectTypesError;
use crate::model::{ObjectType, ObjectTypes, ObjectTypesExt};
use crate::xml_stream::{line_column, StartTag, Token, XmlStream};
use mapkit_core::{Color, Properties};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reader for object type catalog files.
///
/// The reader always returns the catalog accumulated so far. When reading
/// fails, the cause is available from [`ObjectTypesReader::error`] until the
/// next read.
#[derive(Debug, Default)]
pub struct ObjectTypesReader {
    error: Option<ObjectTypesError>,
}

impl ObjectTypesReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the catalog stored at `path`.
    pub fn read_object_types(&mut self, path: impl AsRef<Path>) -> ObjectTypes {
        self.error = None;
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.error = Some(ObjectTypesError::OpenForReading(err));
                return ObjectTypes::new();
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                // Types completed before the bad bytes are kept
                let valid_up_to = err.utf8_error().valid_up_to();
                let prefix = String::from_utf8_lossy(&err.as_bytes()[..valid_up_to]);
                let object_types = self.read_from_str(&prefix);
                let (line, column) = line_column(&prefix, valid_up_to);
                self.error = Some(ObjectTypesError::Parse {
                    message: "Encountered incorrectly encoded content.".to_string(),
                    line,
                    column,
                });
                return object_types;
            }
        };

        let object_types = self.read_from_str(&content);
        if self.error.is_none() {
            info!(path = %path.display(), count = object_types.len(), "Loaded object types");
        }
        object_types
    }

    /// Parses a catalog held in memory.
    pub fn read_from_str(&mut self, content: &str) -> ObjectTypes {
        self.error = None;

        let mut object_types = ObjectTypes::new();
        let mut stream = XmlStream::new(content);

        match stream.read_next_start_element() {
            Some(root) if root.name == "objecttypes" => {}
            _ => {
                self.error = Some(ObjectTypesError::MissingRoot);
                return object_types;
            }
        }

        while let Some(tag) = stream.read_next_start_element() {
            if tag.name == "objecttype" {
                let object_type = read_object_type(&mut stream, &tag);
                if object_types.find_type(&object_type.name).is_some() {
                    warn!(name = %object_type.name, "Ignoring duplicate object type");
                } else {
                    object_types.push(object_type);
                }
            } else {
                read_unknown_element(&mut stream, &tag);
            }
        }

        if let Some(err) = stream.take_error() {
            self.error = Some(ObjectTypesError::Parse {
                message: err.message,
                line: err.line,
                column: err.column,
            });
        }

        object_types
    }

    /// The error from the last read, if it failed.
    pub fn error(&self) -> Option<&ObjectTypesError> {
        self.error.as_ref()
    }

    /// Human-readable form of [`Self::error`]; empty after a successful read.
    pub fn error_string(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn take_error(&mut self) -> Option<ObjectTypesError> {
        self.error.take()
    }
}

fn read_unknown_element(stream: &mut XmlStream<'_>, tag: &StartTag) {
    let (line, column) = stream.position();
    debug!(element = %tag.name, line, column, "Skipping unknown element");
    stream.skip_current_element();
}

fn read_object_type(stream: &mut XmlStream<'_>, tag: &StartTag) -> ObjectType {
    let name = tag.attribute("name").to_string();
    let color_name = tag.attribute("color");
    let color = Color::parse(color_name).unwrap_or_else(|err| {
        warn!(object_type = %name, error = %err, "Invalid object type color");
        Color::default()
    });

    let mut properties = Properties::new();
    while let Some(child) = stream.read_next_start_element() {
        if child.name == "properties" {
            read_properties(stream, &mut properties);
        } else {
            read_unknown_element(stream, &child);
        }
    }

    ObjectType {
        name,
        color,
        properties,
    }
}

fn read_properties(stream: &mut XmlStream<'_>, properties: &mut Properties) {
    while let Some(tag) = stream.read_next_start_element() {
        if tag.name == "property" {
            read_property(stream, &tag, properties);
        } else {
            read_unknown_element(stream, &tag);
        }
    }
}

fn read_property(stream: &mut XmlStream<'_>, tag: &StartTag, properties: &mut Properties) {
    let name = tag.attribute("name").to_string();
    let mut value = tag.attribute("value").to_string();

    while let Some(token) = stream.read_next() {
        match token {
            Token::End => break,
            Token::Text(text) => {
                if value.is_empty() && !text.chars().all(char::is_whitespace) {
                    value = text;
                }
            }
            Token::Start(child) => read_unknown_element(stream, &child),
        }
    }

    properties.insert(name, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_reads_types_and_properties() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<objecttypes>
 <objecttype name="enemy" color="#ff0000">
  <properties>
   <property name="hp" value="10"/>
   <property name="speed" value="2.5"/>
  </properties>
 </objecttype>
 <objecttype name="chest" color="#ffd700"/>
</objecttypes>
"##,
        );

        assert!(reader.error().is_none());
        assert_eq!(reader.error_string(), "");
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "enemy");
        assert_eq!(types[0].color, Color::rgb(255, 0, 0));
        assert_eq!(types[0].properties.len(), 2);
        assert_eq!(types[0].properties["speed"], "2.5");
        assert_eq!(types[1].name, "chest");
        assert!(types[1].properties.is_empty());
    }

    #[test]
    fn test_type_without_properties_does_not_swallow_siblings() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            r##"<objecttypes>
 <objecttype name="a" color="#000001"></objecttype>
 <objecttype name="b" color="#000002">
  <properties><property name="k" value="v"/></properties>
 </objecttype>
 <objecttype name="c" color="#000003"/>
</objecttypes>"##,
        );

        assert!(reader.error().is_none());
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(types[0].properties.is_empty());
        assert!(types[2].properties.is_empty());
    }

    #[test]
    fn test_text_value_used_when_attribute_missing() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            "<objecttypes><objecttype name=\"npc\" color=\"#00ff00\"><properties>\
             <property name=\"dialog\">hello\nworld</property>\
             <property name=\"both\" value=\"attr\">text</property>\
             </properties></objecttype></objecttypes>",
        );

        assert_eq!(types[0].properties["dialog"], "hello\nworld");
        assert_eq!(types[0].properties["both"], "attr");
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            r##"<objecttypes>
 <group name="ignored"><objecttype name="nested" color="#111111"/></group>
 <objecttype name="door" color="#222222">
  <icon file="door.png"/>
  <properties>
   <comment>skip me</comment>
   <property name="locked" value="true"><extra/></property>
  </properties>
 </objecttype>
</objecttypes>"##,
        );

        assert!(reader.error().is_none());
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "door");
        assert_eq!(types[0].properties.len(), 1);
        assert_eq!(types[0].properties["locked"], "true");
    }

    #[test]
    fn test_wrong_root_is_format_error() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str("<map><objecttype name=\"x\" color=\"#000000\"/></map>");

        assert!(types.is_empty());
        let err = reader.error().unwrap();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(reader.error_string(), "File doesn't contain object types.");
    }

    #[test]
    fn test_empty_document_is_format_error() {
        let mut reader = ObjectTypesReader::new();
        assert!(reader.read_from_str("").is_empty());
        assert!(matches!(reader.error(), Some(ObjectTypesError::MissingRoot)));
    }

    #[test]
    fn test_malformed_xml_keeps_partial_catalog() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            "<objecttypes>\n<objecttype name=\"first\" color=\"#010203\"/>\n<objecttype name=\"second\" color=\"#000000\">\n</objecttypes>",
        );

        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name, "first");
        match reader.error() {
            Some(ObjectTypesError::Parse { line, .. }) => assert_eq!(*line, 4),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(reader.error_string().contains("Line 4"));
    }

    #[test]
    fn test_invalid_color_falls_back_to_black() {
        let mut reader = ObjectTypesReader::new();
        let types =
            reader.read_from_str("<objecttypes><objecttype name=\"x\" color=\"nope\"/></objecttypes>");
        assert_eq!(types[0].color, Color::default());
        assert!(reader.error().is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let mut reader = ObjectTypesReader::new();
        let types = reader.read_from_str(
            "<objecttypes><objecttype name=\"x\" color=\"#010101\"/><objecttype name=\"x\" color=\"#020202\"/></objecttypes>",
        );
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].color, Color::rgb(1, 1, 1));
    }

    #[test]
    fn test_error_is_cleared_between_reads() {
        let mut reader = ObjectTypesReader::new();
        reader.read_from_str("<nope/>");
        assert!(reader.error().is_some());
        reader.read_from_str("<objecttypes/>");
        assert!(reader.error().is_none());
    }
}
