//! Standalone HTML page around the booking form.

use ironhtml::typed::Document;
use ironhtml_elements::{Body, Div, Head, Html, Link, Meta, Title};

use crate::component::{BookingForm, TITLE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

/// Renders `form` inside a complete Bootstrap 5 document.
pub fn render_page(form: &BookingForm) -> String {
    let content = form.render();

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(TITLE))
                        .child::<Link, _>(|l| {
                            l.attr("href", BOOTSTRAP_CSS).attr("rel", "stylesheet")
                        })
                })
                .child::<Body, _>(|body| {
                    body.class("bg-light")
                        .child::<Div, _>(|d| d.class("container py-5").raw(&content))
                })
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_form() {
        let html = render_page(&BookingForm::new());
        assert!(html.to_lowercase().contains("<!doctype html>"));
        assert!(html.contains("<title>Book a Table</title>"));
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.contains("Submit Reservation"));
    }
}
