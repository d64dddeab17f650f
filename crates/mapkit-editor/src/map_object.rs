//! Map objects edited through the property dialogs.

use mapkit_core::{PointF, Properties, SizeF};
use serde::{Deserialize, Serialize};

/// Identifier of a map object within its document.
pub type ObjectId = u64;

/// A rectangle-shaped object placed on a map, with a name, a type and custom properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapObject {
    pub id: ObjectId,
    pub name: String,
    /// Name of the object type, matched against the object types catalog.
    pub type_name: String,
    pub position: PointF,
    pub size: SizeF,
    pub properties: Properties,
}

impl MapObject {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = PointF::new(x, y);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = SizeF::new(width, height);
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

/// The set of objects on a map. Ids are assigned on insertion and never reused.
#[derive(Debug, Clone, Default)]
pub struct Map {
    objects: Vec<MapObject>,
    next_id: ObjectId,
}

impl Map {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an object, assigning it a fresh id.
    pub fn add_object(&mut self, mut object: MapObject) -> ObjectId {
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        object.id = id;
        self.objects.push(object);
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<MapObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn object(&self, id: ObjectId) -> Option<&MapObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut MapObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut map = Map::new();
        let a = map.add_object(MapObject::new("a", ""));
        let b = map.add_object(MapObject::new("b", ""));
        assert_ne!(a, b);
        assert_eq!(map.object(a).unwrap().name, "a");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut map = Map::default();
        let a = map.add_object(MapObject::new("a", ""));
        assert!(map.remove_object(a).is_some());
        let b = map.add_object(MapObject::new("b", ""));
        assert_ne!(a, b);
        assert!(map.object(a).is_none());
    }

    #[test]
    fn test_builder_accessors() {
        let object = MapObject::new("goblin", "enemy")
            .with_position(16.0, 32.0)
            .with_size(8.0, 12.0)
            .with_property("hp", "3");
        assert_eq!((object.x(), object.y()), (16.0, 32.0));
        assert_eq!((object.width(), object.height()), (8.0, 12.0));
        assert_eq!(object.properties["hp"], "3");
    }
}
