use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FormError;
use super::ordered::OrderedMap;

/// Per-field options passed through to the form builder.
///
/// `required` takes any scalar and is handed to the builder untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,
}

/// A field exactly as written in a form setup file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub options: Option<FieldOptions>,
}

/// A form exactly as written in a form setup file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawForm {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub data_class: Option<String>,
    #[serde(default)]
    pub fields: Option<OrderedMap<RawField>>,
}

/// A validated field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<Value>,
    pub options: FieldOptions,
}

/// A validated form, ready to be assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDefinition {
    pub name: String,
    pub id: String,
    pub theme: Option<String>,
    pub data_class: String,
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    /// Validate `raw`, naming the offending key on failure.
    pub fn from_raw(
        name: &str,
        raw: RawForm,
        default_data_class: &str,
    ) -> Result<Self, FormError> {
        let id = match raw.id {
            None | Some(Value::Null) => {
                return Err(FormError::invalid(
                    format!("{name}.id"),
                    "The child node \"id\" must be configured.",
                ))
            }
            Some(value) => scalar_text(&value).ok_or_else(|| {
                FormError::invalid(format!("{name}.id"), "Expected a scalar value.")
            })?,
        };
        if id.trim().is_empty() {
            return Err(FormError::invalid(
                format!("{name}.id"),
                "The path cannot contain an empty value.",
            ));
        }

        let raw_fields = raw.fields.ok_or_else(|| {
            FormError::invalid(
                format!("{name}.fields"),
                "The child node \"fields\" must be configured.",
            )
        })?;
        if raw_fields.is_empty() {
            return Err(FormError::invalid(
                format!("{name}.fields"),
                "The path should have at least 1 element(s) defined.",
            ));
        }

        let fields = raw_fields
            .into_iter()
            .map(|(field_name, field)| validate_field(name, field_name, field))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            id,
            theme: raw.theme,
            data_class: raw
                .data_class
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| default_data_class.to_string()),
            fields,
        })
    }
}

fn validate_field(form: &str, name: String, raw: RawField) -> Result<FieldDefinition, FormError> {
    let kind = match raw.kind {
        Some(kind) if !kind.trim().is_empty() => kind,
        Some(_) => {
            return Err(FormError::invalid(
                format!("{form}.fields.{name}.type"),
                "The path cannot contain an empty value.",
            ))
        }
        None => {
            return Err(FormError::invalid(
                format!("{form}.fields.{name}.type"),
                "The child node \"type\" must be configured.",
            ))
        }
    };

    if let Some(value) = &raw.value {
        if value.is_array() || value.is_object() {
            return Err(FormError::invalid(
                format!("{form}.fields.{name}.value"),
                "Expected a scalar value.",
            ));
        }
    }

    let options = raw.options.unwrap_or_default();
    if let Some(required) = &options.required {
        if required.is_array() || required.is_object() {
            return Err(FormError::invalid(
                format!("{form}.fields.{name}.options.required"),
                "Expected a scalar value.",
            ));
        }
    }

    Ok(FieldDefinition {
        name,
        kind,
        value: raw.value,
        options,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> OrderedMap<RawForm> {
        serde_saphyr::from_str(yaml).unwrap()
    }

    fn validate(yaml: &str) -> Result<FormDefinition, FormError> {
        let (name, raw) = parse(yaml).into_iter().next().unwrap();
        FormDefinition::from_raw(&name, raw, "QuickFormsData")
    }

    #[test]
    fn full_form_validates() {
        let form = validate(
            "contact:\n  id: contact-form\n  theme: bootstrap\n  fields:\n    name:\n      type: text\n      value: Jane\n      options:\n        label: Your name\n        required: true\n    age:\n      type: integer\n",
        )
        .unwrap();
        assert_eq!(form.name, "contact");
        assert_eq!(form.id, "contact-form");
        assert_eq!(form.theme.as_deref(), Some("bootstrap"));
        assert_eq!(form.data_class, "QuickFormsData");
        let names: Vec<_> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(form.fields[0].value, Some(Value::String("Jane".into())));
        assert_eq!(form.fields[0].options.label.as_deref(), Some("Your name"));
        assert_eq!(form.fields[0].options.required, Some(Value::Bool(true)));
        assert_eq!(form.fields[1].value, None);
    }

    #[test]
    fn numeric_id_is_accepted() {
        let form = validate("f:\n  id: 42\n  data_class: App\\Entity\\Signup\n  fields:\n    a: { type: text }\n")
            .unwrap();
        assert_eq!(form.id, "42");
        assert_eq!(form.data_class, "App\\Entity\\Signup");
    }

    #[test]
    fn missing_id_names_the_key() {
        let err = validate("f:\n  fields:\n    a: { type: text }\n").unwrap_err();
        assert!(matches!(&err, FormError::Invalid { path, .. } if path == "f.id"), "{err}");
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = validate("f:\n  id: x\n  fields: {}\n").unwrap_err();
        assert!(matches!(&err, FormError::Invalid { path, .. } if path == "f.fields"), "{err}");
    }

    #[test]
    fn field_without_type_is_rejected() {
        let err = validate("f:\n  id: x\n  fields:\n    a: { value: 1 }\n").unwrap_err();
        assert!(
            matches!(&err, FormError::Invalid { path, .. } if path == "f.fields.a.type"),
            "{err}"
        );
    }

    #[test]
    fn required_option_accepts_any_scalar() {
        let form = validate(
            "f:\n  id: x\n  fields:\n    a: { type: text, options: { required: \"yes\" } }\n    b: { type: text, options: { required: 1 } }\n",
        )
        .unwrap();
        assert_eq!(form.fields[0].options.required, Some(Value::String("yes".into())));
        assert_eq!(form.fields[1].options.required, Some(Value::from(1)));
    }

    #[test]
    fn required_option_must_be_scalar() {
        let err = validate("f:\n  id: x\n  fields:\n    a: { type: text, options: { required: [1] } }\n")
            .unwrap_err();
        assert!(
            matches!(&err, FormError::Invalid { path, .. } if path == "f.fields.a.options.required"),
            "{err}"
        );
    }

    #[test]
    fn unknown_option_is_a_parse_error() {
        let parsed: Result<OrderedMap<RawForm>, _> = serde_saphyr::from_str(
            "f:\n  id: x\n  fields:\n    a: { type: text, options: { colour: red } }\n",
        );
        assert!(parsed.is_err());
    }
}
