use mapkit_core::{Color, Properties};
use serde::{Deserialize, Serialize};

/// A named template assignable to map objects: display color plus default properties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectType {
    pub name: String,
    pub color: Color,
    pub properties: Properties,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            properties: Properties::new(),
        }
    }

    /// Builder-style helper used when assembling catalogs in code.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// A catalog of object types in file order.
pub type ObjectTypes = Vec<ObjectType>;

/// Lookups over a catalog. Names are the catalog key.
pub trait ObjectTypesExt {
    /// First type with the given name, in catalog order.
    fn find_type(&self, name: &str) -> Option<&ObjectType>;

    /// Replaces the type with the same name, or appends it.
    fn upsert(&mut self, object_type: ObjectType);

    /// Removes the type with the given name, returning it.
    fn remove_type(&mut self, name: &str) -> Option<ObjectType>;
}

impl ObjectTypesExt for ObjectTypes {
    fn find_type(&self, name: &str) -> Option<&ObjectType> {
        self.iter().find(|t| t.name == name)
    }

    fn upsert(&mut self, object_type: ObjectType) {
        match self.iter_mut().find(|t| t.name == object_type.name) {
            Some(existing) => *existing = object_type,
            None => self.push(object_type),
        }
    }

    fn remove_type(&mut self, name: &str) -> Option<ObjectType> {
        let index = self.iter().position(|t| t.name == name)?;
        Some(self.remove(index))
    }
}
