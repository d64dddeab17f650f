use crate::model::ObjectTypes;

/// Supplies the currently loaded object type catalog.
pub trait ObjectTypesProvider {
    fn object_types(&self) -> &ObjectTypes;
}

impl ObjectTypesProvider for ObjectTypes {
    fn object_types(&self) -> &ObjectTypes {
        self
    }
}
