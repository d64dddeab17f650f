//! Undoable map edits and their apply/undo logic.

use crate::map_object::{Map, MapObject, ObjectId};
use mapkit_core::{PointF, Properties, SizeF};
use tracing::warn;

/// An undoable edit of a map. Every variant stores both the old and the new
/// state, so applying and undoing can be repeated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    ChangeMapObject(ChangeMapObject),
    MoveMapObject(MoveMapObject),
    ResizeMapObject(ResizeMapObject),
    ChangeProperties(ChangeProperties),
    Macro(MacroCommand),
}

/// Changes an object's name and type together.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeMapObject {
    pub id: ObjectId,
    pub old_name: String,
    pub old_type: String,
    pub new_name: String,
    pub new_type: String,
}

impl ChangeMapObject {
    pub fn new(
        object: &MapObject,
        new_name: impl Into<String>,
        new_type: impl Into<String>,
    ) -> Self {
        Self {
            id: object.id,
            old_name: object.name.clone(),
            old_type: object.type_name.clone(),
            new_name: new_name.into(),
            new_type: new_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveMapObject {
    pub id: ObjectId,
    pub old_position: PointF,
    pub new_position: PointF,
}

impl MoveMapObject {
    pub fn new(object: &MapObject, new_position: PointF) -> Self {
        Self {
            id: object.id,
            old_position: object.position,
            new_position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeMapObject {
    pub id: ObjectId,
    pub old_size: SizeF,
    pub new_size: SizeF,
}

impl ResizeMapObject {
    pub fn new(object: &MapObject, new_size: SizeF) -> Self {
        Self {
            id: object.id,
            old_size: object.size,
            new_size,
        }
    }
}

/// Replaces the whole property mapping of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeProperties {
    pub id: ObjectId,
    /// What kind of thing is edited, used in the command text ("Object").
    pub kind: String,
    pub old_properties: Properties,
    pub new_properties: Properties,
}

impl ChangeProperties {
    pub fn new(kind: impl Into<String>, object: &MapObject, new_properties: Properties) -> Self {
        Self {
            id: object.id,
            kind: kind.into(),
            old_properties: object.properties.clone(),
            new_properties,
        }
    }
}

/// Commands grouped so they are undone and redone as one step.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroCommand {
    pub text: String,
    pub commands: Vec<MapCommand>,
}

impl MacroCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            commands: Vec::new(),
        }
    }
}

impl From<ChangeMapObject> for MapCommand {
    fn from(cmd: ChangeMapObject) -> Self {
        Self::ChangeMapObject(cmd)
    }
}

impl From<MoveMapObject> for MapCommand {
    fn from(cmd: MoveMapObject) -> Self {
        Self::MoveMapObject(cmd)
    }
}

impl From<ResizeMapObject> for MapCommand {
    fn from(cmd: ResizeMapObject) -> Self {
        Self::ResizeMapObject(cmd)
    }
}

impl From<ChangeProperties> for MapCommand {
    fn from(cmd: ChangeProperties) -> Self {
        Self::ChangeProperties(cmd)
    }
}

impl From<MacroCommand> for MapCommand {
    fn from(cmd: MacroCommand) -> Self {
        Self::Macro(cmd)
    }
}

fn target<'a>(map: &'a mut Map, id: ObjectId, command: &str) -> Option<&'a mut MapObject> {
    let object = map.object_mut(id);
    if object.is_none() {
        warn!(id, command, "Map object vanished, command has no effect");
    }
    object
}

impl MapCommand {
    /// Display text, as shown in an undo history view.
    pub fn text(&self) -> String {
        match self {
            Self::ChangeMapObject(_) => "Change Object".to_string(),
            Self::MoveMapObject(_) => "Move Object".to_string(),
            Self::ResizeMapObject(_) => "Resize Object".to_string(),
            Self::ChangeProperties(cmd) => format!("Change {} Properties", cmd.kind),
            Self::Macro(cmd) => cmd.text.clone(),
        }
    }

    /// Number of leaf commands, counting macro children recursively.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Macro(cmd) => cmd.commands.iter().map(Self::leaf_count).sum(),
            _ => 1,
        }
    }

    pub fn apply(&self, map: &mut Map) {
        match self {
            Self::ChangeMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "change object") {
                    object.name = cmd.new_name.clone();
                    object.type_name = cmd.new_type.clone();
                }
            }
            Self::MoveMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "move object") {
                    object.position = cmd.new_position;
                }
            }
            Self::ResizeMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "resize object") {
                    object.size = cmd.new_size;
                }
            }
            Self::ChangeProperties(cmd) => {
                if let Some(object) = target(map, cmd.id, "change properties") {
                    object.properties = cmd.new_properties.clone();
                }
            }
            Self::Macro(cmd) => {
                for sub_cmd in &cmd.commands {
                    sub_cmd.apply(map);
                }
            }
        }
    }

    pub fn undo(&self, map: &mut Map) {
        match self {
            Self::ChangeMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "change object") {
                    object.name = cmd.old_name.clone();
                    object.type_name = cmd.old_type.clone();
                }
            }
            Self::MoveMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "move object") {
                    object.position = cmd.old_position;
                }
            }
            Self::ResizeMapObject(cmd) => {
                if let Some(object) = target(map, cmd.id, "resize object") {
                    object.size = cmd.old_size;
                }
            }
            Self::ChangeProperties(cmd) => {
                if let Some(object) = target(map, cmd.id, "change properties") {
                    object.properties = cmd.old_properties.clone();
                }
            }
            Self::Macro(cmd) => {
                for sub_cmd in cmd.commands.iter().rev() {
                    sub_cmd.undo(map);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with_object() -> (Map, ObjectId) {
        let mut map = Map::new();
        let id = map.add_object(
            MapObject::new("crate", "prop")
                .with_position(1.0, 2.0)
                .with_size(3.0, 4.0),
        );
        (map, id)
    }

    #[test]
    fn test_change_map_object_apply_undo() {
        let (mut map, id) = map_with_object();
        let cmd: MapCommand = ChangeMapObject::new(map.object(id).unwrap(), "barrel", "loot").into();

        cmd.apply(&mut map);
        let object = map.object(id).unwrap();
        assert_eq!((object.name.as_str(), object.type_name.as_str()), ("barrel", "loot"));

        cmd.undo(&mut map);
        let object = map.object(id).unwrap();
        assert_eq!((object.name.as_str(), object.type_name.as_str()), ("crate", "prop"));
    }

    #[test]
    fn test_move_and_resize() {
        let (mut map, id) = map_with_object();
        let object = map.object(id).unwrap().clone();
        let mv: MapCommand = MoveMapObject::new(&object, PointF::new(10.0, 20.0)).into();
        let rs: MapCommand = ResizeMapObject::new(&object, SizeF::new(30.0, 40.0)).into();

        mv.apply(&mut map);
        rs.apply(&mut map);
        assert_eq!(map.object(id).unwrap().position, PointF::new(10.0, 20.0));
        assert_eq!(map.object(id).unwrap().size, SizeF::new(30.0, 40.0));

        rs.undo(&mut map);
        mv.undo(&mut map);
        assert_eq!(map.object(id).unwrap().position, PointF::new(1.0, 2.0));
        assert_eq!(map.object(id).unwrap().size, SizeF::new(3.0, 4.0));
    }

    #[test]
    fn test_macro_undoes_in_reverse_order() {
        let (mut map, id) = map_with_object();
        let object = map.object(id).unwrap().clone();

        let mut first = Properties::new();
        first.insert("a".to_string(), "1".to_string());
        let step1 = ChangeProperties::new("Object", &object, first.clone());

        let mut with_first = object.clone();
        with_first.properties = first;
        let mut second = Properties::new();
        second.insert("b".to_string(), "2".to_string());
        let step2 = ChangeProperties::new("Object", &with_first, second.clone());

        let mut group = MacroCommand::new("Edit");
        group.commands.push(step1.into());
        group.commands.push(step2.into());
        let cmd = MapCommand::from(group);

        cmd.apply(&mut map);
        assert_eq!(map.object(id).unwrap().properties, second);

        cmd.undo(&mut map);
        assert!(map.object(id).unwrap().properties.is_empty());
        assert_eq!(cmd.leaf_count(), 2);
    }

    #[test]
    fn test_missing_object_is_ignored() {
        let (mut map, id) = map_with_object();
        let object = map.remove_object(id).unwrap();
        let cmd: MapCommand = MoveMapObject::new(&object, PointF::new(5.0, 5.0)).into();
        cmd.apply(&mut map);
        cmd.undo(&mut map);
        assert!(map.is_empty());
    }

    #[test]
    fn test_command_text() {
        let object = MapObject::default();
        let cmd: MapCommand = ChangeProperties::new("Object", &object, Properties::new()).into();
        assert_eq!(cmd.text(), "Change Object Properties");
        assert_eq!(MapCommand::from(MacroCommand::new("Change Object")).text(), "Change Object");
    }
}
