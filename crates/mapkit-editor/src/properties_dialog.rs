//! Generic "edit custom properties" dialog.

use crate::commands::ChangeProperties;
use crate::document::MapDocument;
use crate::error::EditorResult;
use crate::map_object::{MapObject, ObjectId};
use crate::properties_model::PropertiesModel;
use tracing::debug;

/// Holds the live property list for one object until the user confirms or cancels.
#[derive(Debug, Clone)]
pub struct PropertiesDialog {
    kind: String,
    object_id: ObjectId,
    model: PropertiesModel,
}

impl PropertiesDialog {
    /// `kind` names what is edited ("Object") and appears in the undo text.
    pub fn new(kind: impl Into<String>, object: &MapObject) -> Self {
        Self {
            kind: kind.into(),
            object_id: object.id,
            model: PropertiesModel::from_properties(&object.properties),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    pub fn model(&self) -> &PropertiesModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PropertiesModel {
        &mut self.model
    }

    /// Pushes a property change when the edited properties differ from the object's.
    ///
    /// Returns whether a command was pushed.
    pub fn accept(&self, document: &mut MapDocument) -> EditorResult<bool> {
        let object = document.object(self.object_id)?;
        let properties = self.model.properties();
        if object.properties == properties {
            debug!(id = self.object_id, "Properties unchanged");
            return Ok(false);
        }

        let command = ChangeProperties::new(self.kind.clone(), object, properties);
        document.push(command.into());
        Ok(true)
    }
}
