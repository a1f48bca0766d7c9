//! Form setup files: schema, validation and assembly into views.

pub mod builder;
pub mod data;
pub mod error;
pub mod loader;
pub mod ordered;
pub mod schema;
pub mod service;

pub use builder::{
    FieldView, FormBuilder, FormFactory, FormType, FormView, PlainFormBuilder, PlainFormFactory,
    FORM_TYPE_NAME,
};
pub use data::FormData;
pub use error::FormError;
pub use loader::{load_setup_info, FormsSetup};
pub use ordered::OrderedMap;
pub use schema::{FieldDefinition, FieldOptions, FormDefinition, RawField, RawForm};
pub use service::{LoadedForm, QuickForms};
