//! Server-rendered dashboard pages.
//!
//! Every value taken from the catalog or the registry is escaped before it
//! lands in markup.

use html_escape::{encode_double_quoted_attribute, encode_text};
use sw_core::responses::{PROBE_PAGE_TITLE, URGENT_PAGE_TITLE};
use sw_core::{AlertPage, CategoryRegistry, ProbePage};

use super::empty_state;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
nav a{margin-right:1rem}\
table{border-collapse:collapse}\
td,th{padding:.4rem .8rem;border-bottom:1px solid #ddd;text-align:left}\
td.num{text-align:right}\
td.neg{color:#b00020}\
img{max-height:64px}\
.notice{padding:.8rem;background:#fff4e5}";

/// Ranked restock list for the urgent page or one category.
#[must_use]
pub fn alert_page(page: &AlertPage, registry: &CategoryRegistry) -> String {
    let mut body = String::new();
    if page.products.is_empty() {
        push_notice(&mut body, empty_state(page.status));
    } else {
        body.push_str(
            "<table><thead><tr><th>Image</th><th>Title</th><th>Current</th><th>Needed</th></tr></thead><tbody>",
        );
        for alert in &page.products {
            let current = alert.current_quantity();
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td class=\"{}\">{current}</td><td class=\"num\">{}</td></tr>",
                image_cell(alert.image_url(), alert.title()),
                encode_text(alert.title()),
                quantity_class(current),
                alert.needed_quantity,
            ));
        }
        body.push_str("</tbody></table>");
    }
    layout(&page.page_title, registry, &body)
}

/// Unfiltered connectivity listing.
#[must_use]
pub fn probe_page(page: &ProbePage, registry: &CategoryRegistry) -> String {
    let mut body = String::new();
    if page.products.is_empty() {
        push_notice(&mut body, super::Tabular::empty_message(page));
    } else {
        body.push_str(
            "<table><thead><tr><th>Image</th><th>Title</th><th>Status</th><th>Current</th></tr></thead><tbody>",
        );
        for product in &page.products {
            let quantity = product
                .current_quantity
                .map_or_else(|| "N/A".to_string(), |qty| qty.to_string());
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{quantity}</td></tr>",
                image_cell(product.image_url.as_deref(), &product.title),
                encode_text(&product.title),
                encode_text(product.status.as_deref().unwrap_or("-")),
                product.current_quantity.map_or("num", quantity_class),
            ));
        }
        body.push_str("</tbody></table>");
    }
    layout(&page.page_title, registry, &body)
}

#[must_use]
pub fn not_found(slug: &str, registry: &CategoryRegistry) -> String {
    let mut body = String::new();
    push_notice(&mut body, &format!("No category named \"{slug}\"."));
    layout("Not Found", registry, &body)
}

#[must_use]
pub fn server_error(registry: &CategoryRegistry) -> String {
    let mut body = String::new();
    push_notice(
        &mut body,
        "The catalog returned data this dashboard cannot display. Check the logs.",
    );
    layout("Error", registry, &body)
}

fn layout(title: &str, registry: &CategoryRegistry, body: &str) -> String {
    let title = encode_text(title);
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>\
<body>{}<h1>{title}</h1>{body}</body></html>\n",
        nav(registry)
    )
}

fn nav(registry: &CategoryRegistry) -> String {
    let links = registry
        .iter()
        .map(|category| {
            format!(
                "<a href=\"/{}\">{}</a>",
                encode_double_quoted_attribute(&urlencoding::encode(&category.slug)),
                encode_text(&category.title)
            )
        })
        .collect::<String>();
    format!(
        "<nav><a href=\"/\">{URGENT_PAGE_TITLE}</a>{links}<a href=\"/testall\">{PROBE_PAGE_TITLE}</a></nav>"
    )
}

fn push_notice(body: &mut String, message: &str) {
    body.push_str(&format!("<p class=\"notice\">{}</p>", encode_text(message)));
}

fn image_cell(url: Option<&str>, title: &str) -> String {
    url.map_or_else(
        || String::from("No image"),
        |url| {
            format!(
                "<img src=\"{}\" alt=\"{}\">",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(title)
            )
        },
    )
}

const fn quantity_class(quantity: i64) -> &'static str {
    if quantity < 0 { "num neg" } else { "num" }
}
