//! Bootstrap 5 form widgets.

use super::{html_escape, Widget, WidgetAttrs};

/// Bootstrap 5 input widget (`text`, `email`, `date`, `time`, `number`).
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type.
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    fn typed(input_type: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            ..Default::default()
        }
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::typed("email")
    }

    /// Creates a calendar date input (`YYYY-MM-DD`).
    pub fn date() -> Self {
        Self::typed("date")
    }

    /// Creates a time-of-day input (`HH:MM`).
    pub fn time() -> Self {
        Self::typed("time")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::typed("number")
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let id = attrs.get("id").cloned().unwrap_or_else(|| name.to_string());

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let extra_attrs = attrs.extra_html();

        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{}{extra_attrs}>"#,
            self.input_type, class, id, name, value_attr, placeholder_attr
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Bootstrap 5 textarea widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    /// Number of rows.
    pub rows: usize,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for BootstrapTextarea {
    fn default() -> Self {
        Self {
            rows: 4,
            placeholder: None,
        }
    }
}

impl BootstrapTextarea {
    /// Creates a new textarea with the specified rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        let id = attrs.get("id").cloned().unwrap_or_else(|| name.to_string());

        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let mut class = "form-control".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let extra_attrs = attrs.extra_html();

        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{placeholder_attr}{extra_attrs}>{}</textarea>"#,
            class, id, name, self.rows, content
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_text_input() {
        let widget = BootstrapTextInput::new().placeholder("Enter name");
        let html = widget.render("name", None, &WidgetAttrs::new());
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"id="name""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"placeholder="Enter name""#));
    }

    #[test]
    fn test_typed_inputs() {
        let attrs = WidgetAttrs::new();
        assert!(BootstrapTextInput::date()
            .render("date", Some("2024-12-31"), &attrs)
            .contains(r#"type="date""#));
        assert!(BootstrapTextInput::time()
            .render("time", Some("18:00"), &attrs)
            .contains(r#"value="18:00""#));
        assert_eq!(BootstrapTextInput::number().input_type, "number");
        assert_eq!(Widget::input_type(&BootstrapTextInput::email()), "email");
    }

    #[test]
    fn test_input_escapes_value() {
        let widget = BootstrapTextInput::new();
        let html = widget.render("name", Some(r#"Bob "The Chef""#), &WidgetAttrs::new());
        assert!(html.contains("Bob &quot;The Chef&quot;"));
    }

    #[test]
    fn test_bootstrap_textarea() {
        let widget = BootstrapTextarea::new(3).placeholder("Optional");
        let attrs = WidgetAttrs::new().with("class", "is-invalid");
        let html = widget.render("specialRequest", Some("Window <seat>"), &attrs);
        assert!(html.contains(r#"class="form-control is-invalid""#));
        assert!(html.contains(r#"rows="3""#));
        assert!(html.contains(r#"placeholder="Optional""#));
        assert!(html.contains("Window &lt;seat&gt;"));
    }
}
