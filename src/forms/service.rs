use serde::Serialize;
use tracing::debug;

use super::builder::{FormBuilder, FormFactory, FormType, FormView, FORM_TYPE_NAME};
use super::data::FormData;
use super::schema::FormDefinition;

/// One assembled form and the theme it asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedForm {
    pub name: String,
    pub view: FormView,
    pub theme: Option<String>,
}

/// Turns validated form definitions into views through a [`FormFactory`].
#[derive(Debug, Clone)]
pub struct QuickForms<F> {
    setup: Vec<FormDefinition>,
    form_type: FormType,
    factory: F,
}

impl<F: FormFactory> QuickForms<F> {
    pub fn new(setup: Vec<FormDefinition>, form_type: FormType, factory: F) -> Self {
        Self {
            setup,
            form_type,
            factory,
        }
    }

    pub fn setup(&self) -> &[FormDefinition] {
        &self.setup
    }

    /// Build every form in setup order.
    pub fn load_forms(&self) -> Vec<LoadedForm> {
        self.setup.iter().map(|form| self.load_form(form)).collect()
    }

    fn load_form(&self, form: &FormDefinition) -> LoadedForm {
        let mut data = FormData::new(&form.data_class);
        for field in &form.fields {
            data.set(&field.name, field.value.clone());
        }

        let mut builder = self
            .factory
            .create_named_builder(&form.name, FORM_TYPE_NAME, data);
        for field in &form.fields {
            let widget = self.form_type.widget_type(&field.kind);
            builder.add(&field.name, &widget, &field.options);
        }
        debug!(form = %form.name, fields = form.fields.len(), "form assembled");

        LoadedForm {
            name: form.name.clone(),
            view: builder.into_view(),
            theme: form.theme.clone(),
        }
    }
}
