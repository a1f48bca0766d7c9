//! The seam between form definitions and whatever renders them.
//!
//! [`FormFactory`] and [`FormBuilder`] mirror the shape of a typical form
//! component: a factory creates a named builder bound to some data, fields
//! are added one by one, and the builder finishes into a view. The in-crate
//! [`PlainFormFactory`] produces plain serializable [`FormView`]s.

use serde::Serialize;
use serde_json::Value;

use super::data::FormData;
use super::schema::FieldOptions;

/// Type name every assembled form is built with.
pub const FORM_TYPE_NAME: &str = "QuickFormsType";

/// Maps short field types (`text`) to widget type names (`<prefix>\TextType`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormType {
    namespace_prefix: String,
}

impl FormType {
    pub fn new(namespace_prefix: impl Into<String>) -> Self {
        Self {
            namespace_prefix: namespace_prefix.into(),
        }
    }

    pub fn namespace_prefix(&self) -> &str {
        &self.namespace_prefix
    }

    pub fn set_namespace_prefix(&mut self, namespace_prefix: impl Into<String>) {
        self.namespace_prefix = namespace_prefix.into();
    }

    /// Widget type name for a field `kind`.
    pub fn widget_type(&self, kind: &str) -> String {
        let mut chars = kind.chars();
        let class = match chars.next() {
            Some(first) => format!("{}{}Type", first.to_uppercase(), chars.as_str()),
            None => "Type".to_string(),
        };
        let prefix = self.namespace_prefix.trim_end_matches('\\');
        if prefix.is_empty() {
            class
        } else {
            format!("{prefix}\\{class}")
        }
    }
}

/// A rendered-ready field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub widget: String,
    pub options: FieldOptions,
    pub value: Value,
}

/// A rendered-ready form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub name: String,
    pub form_type: String,
    pub data_class: String,
    pub fields: Vec<FieldView>,
}

pub trait FormBuilder {
    /// Add a field of widget type `widget`.
    fn add(&mut self, name: &str, widget: &str, options: &FieldOptions);

    /// Finish the form.
    fn into_view(self) -> FormView;
}

pub trait FormFactory {
    type Builder: FormBuilder;

    /// Create a builder for a form called `name` of type `form_type`.
    fn create_named_builder(&self, name: &str, form_type: &str, data: FormData) -> Self::Builder;
}

/// Factory producing [`FormView`]s with no rendering attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormFactory;

#[derive(Debug)]
pub struct PlainFormBuilder {
    name: String,
    form_type: String,
    data: FormData,
    fields: Vec<FieldView>,
}

impl FormFactory for PlainFormFactory {
    type Builder = PlainFormBuilder;

    fn create_named_builder(&self, name: &str, form_type: &str, data: FormData) -> PlainFormBuilder {
        PlainFormBuilder {
            name: name.to_string(),
            form_type: form_type.to_string(),
            data,
            fields: Vec::new(),
        }
    }
}

impl FormBuilder for PlainFormBuilder {
    fn add(&mut self, name: &str, widget: &str, options: &FieldOptions) {
        let value = self.data.get(name).cloned().unwrap_or(Value::Null);
        self.fields.push(FieldView {
            name: name.to_string(),
            widget: widget.to_string(),
            options: options.clone(),
            value,
        });
    }

    fn into_view(self) -> FormView {
        FormView {
            name: self.name,
            form_type: self.form_type,
            data_class: self.data.class_name().to_string(),
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_type_capitalises_and_prefixes() {
        let form_type = FormType::new("Symfony\\Component\\Form\\Extension\\Core\\Type");
        assert_eq!(
            form_type.widget_type("text"),
            "Symfony\\Component\\Form\\Extension\\Core\\Type\\TextType"
        );
        assert_eq!(
            form_type.widget_type("emailAddress"),
            "Symfony\\Component\\Form\\Extension\\Core\\Type\\EmailAddressType"
        );
    }

    #[test]
    fn prefix_can_be_replaced() {
        let mut form_type = FormType::new("A\\");
        assert_eq!(form_type.widget_type("choice"), "A\\ChoiceType");
        form_type.set_namespace_prefix("");
        assert_eq!(form_type.namespace_prefix(), "");
        assert_eq!(form_type.widget_type("choice"), "ChoiceType");
    }

    #[test]
    fn plain_builder_binds_field_values() {
        let mut data = FormData::new("QuickFormsData");
        data.set("name", Some(Value::from("Jane")));
        let mut builder = PlainFormFactory.create_named_builder("contact", FORM_TYPE_NAME, data);
        builder.add("name", "TextType", &FieldOptions::default());
        builder.add("email", "EmailType", &FieldOptions::default());
        let view = builder.into_view();
        assert_eq!(view.name, "contact");
        assert_eq!(view.form_type, FORM_TYPE_NAME);
        assert_eq!(view.data_class, "QuickFormsData");
        assert_eq!(view.fields[0].value, Value::from("Jane"));
        assert_eq!(view.fields[1].value, Value::Null);
    }
}
