use crate::model::{ObjectType, ObjectTypes, ObjectTypesExt};
use mapkit_core::Color;

/// Flattened row shown by a type picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeUiModel {
    pub name: String,
    pub color: String,
    pub property_count: usize,
}

impl From<&ObjectType> for ObjectTypeUiModel {
    fn from(t: &ObjectType) -> Self {
        Self {
            name: t.name.clone(),
            color: t.color.name(),
            property_count: t.properties.len(),
        }
    }
}

/// Read-only list model over a catalog, backing type pickers.
///
/// Rows follow catalog order. The model does not support inserting types;
/// free text typed into a picker is not added to the catalog.
#[derive(Debug, Clone, Default)]
pub struct ObjectTypesModel {
    object_types: ObjectTypes,
}

impl ObjectTypesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog shown by the model.
    pub fn set_object_types(&mut self, object_types: ObjectTypes) {
        self.object_types = object_types;
    }

    pub fn object_types(&self) -> &ObjectTypes {
        &self.object_types
    }

    pub fn row_count(&self) -> usize {
        self.object_types.len()
    }

    pub fn name_at(&self, row: usize) -> Option<&str> {
        self.object_types.get(row).map(|t| t.name.as_str())
    }

    pub fn color_at(&self, row: usize) -> Option<Color> {
        self.object_types.get(row).map(|t| t.color)
    }

    /// Row of the first type called `name`.
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.object_types.iter().position(|t| t.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.find_type(name)
    }

    pub fn ui_rows(&self) -> Vec<ObjectTypeUiModel> {
        self.object_types.iter().map(ObjectTypeUiModel::from).collect()
    }
}
