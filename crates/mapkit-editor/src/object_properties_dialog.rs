//! Dialog controller for editing a single map object.
//!
//! Holds the form state (name, type, position, size), the live property list
//! and the object type picker model. Nothing reaches the document until
//! [`ObjectPropertiesDialog::accept`], which records every change as one
//! undoable step.

use crate::commands::{ChangeMapObject, MoveMapObject, ResizeMapObject};
use crate::document::MapDocument;
use crate::error::EditorResult;
use crate::map_object::{MapObject, ObjectId};
use crate::properties_dialog::PropertiesDialog;
use crate::properties_model::PropertiesModel;
use mapkit_core::{PointF, PropertiesExt, SizeF};
use mapkit_objecttypes::{ObjectTypesModel, ObjectTypesProvider};
use tracing::debug;

/// Undo text of the macro pushed when object fields change.
pub const CHANGE_OBJECT_TEXT: &str = "Change Object";

/// Editable form fields of a map object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectFields {
    pub name: String,
    pub type_name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&MapObject> for ObjectFields {
    fn from(object: &MapObject) -> Self {
        Self {
            name: object.name.clone(),
            type_name: object.type_name.clone(),
            x: object.x(),
            y: object.y(),
            width: object.width(),
            height: object.height(),
        }
    }
}

/// How the dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted {
        /// Name, type, position or size differed from the object.
        object_changed: bool,
        /// A property change command was pushed.
        properties_changed: bool,
    },
    Rejected,
}

#[derive(Debug, Clone)]
pub struct ObjectPropertiesDialog {
    base: PropertiesDialog,
    fields: ObjectFields,
    prev_type_name: String,
    object_types_model: ObjectTypesModel,
}

impl ObjectPropertiesDialog {
    /// Opens the dialog on `object_id`, taking the type list from `object_types`.
    pub fn new(
        document: &MapDocument,
        object_id: ObjectId,
        object_types: &impl ObjectTypesProvider,
    ) -> EditorResult<Self> {
        let object = document.object(object_id)?;

        let mut object_types_model = ObjectTypesModel::new();
        object_types_model.set_object_types(object_types.object_types().clone());

        Ok(Self {
            base: PropertiesDialog::new("Object", object),
            fields: ObjectFields::from(object),
            prev_type_name: object.type_name.clone(),
            object_types_model,
        })
    }

    pub fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }

    pub fn fields(&self) -> &ObjectFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn type_name(&self) -> &str {
        &self.fields.type_name
    }

    /// Edits the type text without touching properties, like typing into the picker.
    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.fields.type_name = type_name.into();
    }

    pub fn x(&self) -> f64 {
        self.fields.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.fields.x = x;
    }

    pub fn y(&self) -> f64 {
        self.fields.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.fields.y = y;
    }

    pub fn width(&self) -> f64 {
        self.fields.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.fields.width = width;
    }

    pub fn height(&self) -> f64 {
        self.fields.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.fields.height = height;
    }

    pub fn object_types_model(&self) -> &ObjectTypesModel {
        &self.object_types_model
    }

    pub fn properties_model(&self) -> &PropertiesModel {
        self.base.model()
    }

    pub fn properties_model_mut(&mut self) -> &mut PropertiesModel {
        self.base.model_mut()
    }

    /// A type was picked: swap the previous type's template properties for the new one's.
    ///
    /// Keys defined by the previous type are removed whatever their current
    /// value; keys defined by the new type are added or overwritten. Other
    /// properties are left alone.
    pub fn type_changed(&mut self, type_name: &str) {
        let mut properties = self.base.model().properties();

        if let Some(previous) = self.object_types_model.find(&self.prev_type_name) {
            properties.remove_keys_of(&previous.properties);
        }
        if let Some(selected) = self.object_types_model.find(type_name) {
            properties.merge_from(&selected.properties);
        }

        self.base.model_mut().set_properties(&properties);
        self.fields.type_name = type_name.to_string();
        self.prev_type_name = type_name.to_string();
    }

    fn differs_from(&self, object: &MapObject) -> bool {
        let fields = &self.fields;
        object.name != fields.name
            || object.type_name != fields.type_name
            || object.x() != fields.x
            || object.y() != fields.y
            || object.width() != fields.width
            || object.height() != fields.height
    }

    /// Commits the edits to `document`.
    ///
    /// When any object field changed, the rename/retype, move and resize
    /// commands and the property change are pushed as one macro. Otherwise
    /// only the property change is pushed, and only if properties changed.
    pub fn accept(self, document: &mut MapDocument) -> EditorResult<DialogOutcome> {
        let id = self.object_id();
        let object_changed = self.differs_from(document.object(id)?);

        if !object_changed {
            let properties_changed = self.base.accept(document)?;
            return Ok(DialogOutcome::Accepted {
                object_changed,
                properties_changed,
            });
        }

        debug!(id, "Committing object edits");
        let object = document.object(id)?.clone();
        let fields = &self.fields;

        document.begin_macro(CHANGE_OBJECT_TEXT);
        document.push(
            ChangeMapObject::new(&object, fields.name.clone(), fields.type_name.clone()).into(),
        );
        document.push(MoveMapObject::new(&object, PointF::new(fields.x, fields.y)).into());
        document.push(
            ResizeMapObject::new(&object, SizeF::new(fields.width, fields.height)).into(),
        );

        let properties_changed = self.base.accept(document);
        document.end_macro()?;

        Ok(DialogOutcome::Accepted {
            object_changed,
            properties_changed: properties_changed?,
        })
    }

    /// Discards all edits.
    pub fn reject(self) -> DialogOutcome {
        DialogOutcome::Rejected
    }
}
