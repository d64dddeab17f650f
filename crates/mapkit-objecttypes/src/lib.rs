pub mod error;
pub mod model;
pub mod reader;
pub mod traits;
pub mod ui_integration;
pub mod writer;
mod xml_stream;

pub use error::{ErrorKind, ObjectTypesError, ObjectTypesResult};
pub use model::{ObjectType, ObjectTypes, ObjectTypesExt};
pub use reader::ObjectTypesReader;
pub use traits::ObjectTypesProvider;
pub use ui_integration::{ObjectTypeUiModel, ObjectTypesModel};
pub use writer::ObjectTypesWriter;
