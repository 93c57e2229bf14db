//! Field definitions, the validation pass and form rendering.

use std::collections::HashMap;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div};

use crate::error::{FormError, Result, ValidationErrors};
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name. Doubles as the input's `id` and `name`.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Validators, run in order until the first failure.
    pub validators: Vec<Box<dyn Validator>>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            validators: Vec::new(),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Runs this field's validators against `value`.
    ///
    /// Returns the message of the first validator that fails. An optional
    /// field left blank is valid without consulting its validators.
    pub fn validate(&self, value: &str) -> Option<String> {
        if !self.required && value.trim().is_empty() {
            return None;
        }

        self.validators
            .iter()
            .find_map(|validator| validator.validate(value).err())
    }
}

/// Validates every field against `values`.
///
/// Missing values count as empty input. The result only contains failing
/// fields, each with exactly one message.
pub fn validate_fields(
    fields: &[FormFieldDef],
    values: &HashMap<String, String>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in fields {
        let value = values.get(&field.name).map_or("", String::as_str);
        if let Some(message) = field.validate(value) {
            errors.add(&field.name, message);
        }
    }

    tracing::debug!(
        fields = fields.len(),
        failing = errors.len(),
        "validated form"
    );

    errors
}

/// Looks up a field definition by name.
pub fn find_field<'a>(fields: &'a [FormFieldDef], name: &str) -> Result<&'a FormFieldDef> {
    fields
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| FormError::UnknownField(name.to_string()))
}

/// Options for the surrounding `<form>` element and its submit button.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// `action` attribute; omitted when `None`.
    pub action: Option<String>,
    /// `method` attribute.
    pub method: String,
    /// Text of the submit button.
    pub submit_label: String,
    /// CSS classes of the submit button.
    pub submit_class: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            action: None,
            method: "post".to_string(),
            submit_label: "Submit".to_string(),
            submit_class: "btn btn-primary w-100".to_string(),
        }
    }
}

impl FormOptions {
    /// Creates options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `action` attribute.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the submit button text.
    #[must_use]
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Sets the submit button classes.
    #[must_use]
    pub fn submit_class(mut self, class: impl Into<String>) -> Self {
        self.submit_class = class.into();
        self
    }
}

/// Renders a form field with Bootstrap 5 styling.
///
/// The error message, if any, is rendered directly below the input.
pub fn render_bootstrap_field(
    field: &FormFieldDef,
    value: Option<&str>,
    error: Option<&str>,
) -> String {
    let id = field.name.clone();
    let error_id = format!("{}-error", field.name);
    let label_text = field.label.clone();

    let mut attrs = field.attrs.clone();
    attrs.set("id", &id);

    if error.is_some() {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
        attrs.set("aria-invalid", "true");
        attrs.set("aria-describedby", &error_id);
    }

    if field.required {
        attrs.set("aria-required", "true");
    }

    let widget_html = field.widget.render(&field.name, value, &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .when(error.is_some(), |d| {
            d.child::<Div, _>(|e| {
                e.class("invalid-feedback d-block")
                    .attr("id", &error_id)
                    .text(error.unwrap_or(""))
            })
        })
        .render()
}

/// Renders a complete form with Bootstrap 5 styling.
///
/// The submit button is disabled whenever `errors` is non-empty.
pub fn render_bootstrap_form(
    fields: &[FormFieldDef],
    values: &HashMap<String, String>,
    errors: &ValidationErrors,
    options: &FormOptions,
) -> String {
    let method = &options.method;
    let mut form = html! {
        form.method(#method)
    };

    if let Some(action) = &options.action {
        form = form.attr("action", action);
    }

    for field in fields {
        let value = values.get(&field.name).map(String::as_str);
        let field_html = render_bootstrap_field(field, value, errors.get(&field.name));
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let disabled = !errors.is_empty();
    form = form.child::<Button, _>(|b: Element<Button>| {
        b.attr("type", "submit")
            .attr("class", &options.submit_class)
            .when(disabled, |b| b.attr("disabled", "disabled"))
            .text(&options.submit_label)
    });

    form.render()
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}
