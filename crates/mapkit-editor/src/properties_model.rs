//! Editable list of custom properties backing a properties view.

use crate::error::{EditorError, EditorResult};
use mapkit_core::Properties;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: String,
    pub value: String,
}

/// Ordered property rows.
///
/// Unlike [`Properties`], the model keeps rows in the order the user sees
/// them: replacing the whole mapping updates existing rows in place and
/// appends new keys at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesModel {
    rows: Vec<PropertyRow>,
}

impl PropertiesModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(properties: &Properties) -> Self {
        let mut model = Self::new();
        model.set_properties(properties);
        model
    }

    /// Current rows as a mapping.
    pub fn properties(&self) -> Properties {
        self.rows
            .iter()
            .map(|row| (row.name.clone(), row.value.clone()))
            .collect()
    }

    /// Replaces the mapping while keeping the position of surviving rows.
    pub fn set_properties(&mut self, properties: &Properties) {
        self.rows.retain(|row| properties.contains_key(&row.name));
        for row in &mut self.rows {
            if let Some(value) = properties.get(&row.name) {
                row.value.clone_from(value);
            }
        }
        for (name, value) in properties {
            if !self.rows.iter().any(|row| &row.name == name) {
                self.rows.push(PropertyRow {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    /// Sets a value, appending a row when the name is new.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> EditorResult<()> {
        if name.is_empty() {
            return Err(EditorError::EmptyPropertyName);
        }
        let value = value.into();
        match self.rows.iter_mut().find(|row| row.name == name) {
            Some(row) => row.value = value,
            None => self.rows.push(PropertyRow {
                name: name.to_string(),
                value,
            }),
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.rows.iter().position(|row| row.name == name)?;
        Some(self.rows.remove(index).value)
    }

    /// Renames a row in place.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> EditorResult<()> {
        if new_name.is_empty() {
            return Err(EditorError::EmptyPropertyName);
        }
        if old_name == new_name {
            return Ok(());
        }
        if self.contains(new_name) {
            return Err(EditorError::DuplicateProperty(new_name.to_string()));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.name == old_name)
            .ok_or_else(|| EditorError::PropertyNotFound(old_name.to_string()))?;
        row.name = new_name.to_string();
        Ok(())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.name == name)
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> Properties {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(model: &PropertiesModel) -> Vec<&str> {
        model.rows().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_set_properties_keeps_row_order() {
        let mut model = PropertiesModel::new();
        model.set_value("zeta", "1").unwrap();
        model.set_value("alpha", "2").unwrap();

        model.set_properties(&props(&[("alpha", "20"), ("beta", "3"), ("zeta", "1")]));

        assert_eq!(names(&model), ["zeta", "alpha", "beta"]);
        assert_eq!(model.value("alpha"), Some("20"));
        assert_eq!(model.properties(), props(&[("alpha", "20"), ("beta", "3"), ("zeta", "1")]));
    }

    #[test]
    fn test_set_properties_removes_missing_rows() {
        let mut model = PropertiesModel::from_properties(&props(&[("a", "1"), ("b", "2")]));
        model.set_properties(&props(&[("b", "2")]));
        assert_eq!(names(&model), ["b"]);
    }

    #[test]
    fn test_set_value_and_remove() {
        let mut model = PropertiesModel::new();
        model.set_value("hp", "10").unwrap();
        model.set_value("hp", "12").unwrap();
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.remove("hp").as_deref(), Some("12"));
        assert!(model.remove("hp").is_none());
        assert_eq!(model.set_value("", "x").unwrap_err(), EditorError::EmptyPropertyName);
    }

    #[test]
    fn test_rename() {
        let mut model = PropertiesModel::from_properties(&props(&[("a", "1"), ("b", "2")]));
        model.rename("a", "c").unwrap();
        assert_eq!(names(&model), ["c", "b"]);
        assert_eq!(
            model.rename("c", "b").unwrap_err(),
            EditorError::DuplicateProperty("b".to_string())
        );
        assert_eq!(
            model.rename("x", "y").unwrap_err(),
            EditorError::PropertyNotFound("x".to_string())
        );
    }
}
