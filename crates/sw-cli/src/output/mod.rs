use serde::Serialize;
use sw_core::{AlertPage, PageStatus, ProbePage};

use crate::cli::OutputFormat;
use crate::ui;

pub mod html;
pub mod table;

/// A response that knows how to lay itself out as a table.
pub trait Tabular {
    /// Line printed above the table.
    fn heading(&self, color: bool) -> String;

    fn headers(&self) -> &'static [&'static str];

    fn rows(&self) -> Vec<Vec<String>>;

    /// Printed instead of the table when there are no rows.
    fn empty_message(&self) -> &'static str {
        "(no rows)"
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(render_table(
                value,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            ))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Tabular>(value: &T, options: table::TableOptions) -> String {
    let heading = value.heading(options.color);
    let rows = value.rows();
    if rows.is_empty() {
        return format!("{heading}\n\n{}", value.empty_message());
    }
    format!(
        "{heading}\n\n{}",
        table::render_rows(value.headers(), &rows, options)
    )
}

/// What an empty product list means for a given page status.
#[must_use]
pub const fn empty_state(status: PageStatus) -> &'static str {
    match status {
        PageStatus::Ok => "No products need restocking.",
        PageStatus::CatalogUnavailable => {
            "Catalog unavailable: product data could not be loaded. Check the logs."
        }
    }
}

fn page_heading(title: &str, status: PageStatus, count: usize, color: bool) -> String {
    let noun = if count == 1 { "product" } else { "products" };
    format!(
        "{title} [{}] {count} {noun}",
        table::paint_status(status.as_str(), color)
    )
}

impl Tabular for AlertPage {
    fn heading(&self, color: bool) -> String {
        page_heading(&self.page_title, self.status, self.products.len(), color)
    }

    fn headers(&self) -> &'static [&'static str] {
        &["title", "current_quantity", "needed_quantity", "image_url"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.products
            .iter()
            .map(|alert| {
                vec![
                    alert.title().to_string(),
                    alert.current_quantity().to_string(),
                    alert.needed_quantity.to_string(),
                    alert.image_url().unwrap_or("-").to_string(),
                ]
            })
            .collect()
    }

    fn empty_message(&self) -> &'static str {
        empty_state(self.status)
    }
}

impl Tabular for ProbePage {
    fn heading(&self, color: bool) -> String {
        page_heading(&self.page_title, self.status, self.products.len(), color)
    }

    fn headers(&self) -> &'static [&'static str] {
        &["title", "status", "current_quantity", "image_url"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.products
            .iter()
            .map(|product| {
                vec![
                    product.title.clone(),
                    product.status.clone().unwrap_or_else(|| "-".to_string()),
                    product
                        .current_quantity
                        .map_or_else(|| "N/A".to_string(), |qty| qty.to_string()),
                    product.image_url.clone().unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect()
    }

    fn empty_message(&self) -> &'static str {
        match self.status {
            PageStatus::Ok => "The catalog returned no products.",
            PageStatus::CatalogUnavailable => empty_state(self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sw_core::{AlertPage, AlertRecord, ProbePage, ProbeRecord, ProductRecord};

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn alert(title: &str, current: i64, needed: i64) -> AlertRecord {
        AlertRecord {
            product: ProductRecord {
                title: title.to_string(),
                image_url: Some(format!("https://cdn.example.com/{title}.png")),
                current_quantity: current,
                threshold: 0,
            },
            needed_quantity: needed,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let page = AlertPage::new("Urgent", vec![alert("C", -12, 12)]);
        let out = render(&page, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["page_title"], "Urgent");
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["products"][0]["needed_quantity"], 12);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let page = AlertPage::unavailable("Quilt");
        let out = render(&page, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"catalog_unavailable\""));
    }

    #[test]
    fn alert_table_keeps_ranked_order_and_columns() {
        let page = AlertPage::new("Urgent", vec![alert("C", -12, 12), alert("A", -5, 5)]);
        let out = render_table(&page, PLAIN);
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Urgent [ok] 2 products");
        assert!(lines[2].starts_with("title"));
        assert!(lines[2].contains("needed_quantity"));
        assert!(lines[4].starts_with('C'));
        assert!(lines[5].starts_with('A'));
    }

    #[test]
    fn empty_pages_explain_why() {
        let ok = render_table(&AlertPage::new("Simple", Vec::new()), PLAIN);
        assert!(ok.ends_with("No products need restocking."));

        let degraded = render_table(&AlertPage::unavailable("Simple"), PLAIN);
        assert!(degraded.starts_with("Simple [catalog_unavailable] 0 products"));
        assert!(degraded.contains("Catalog unavailable"));
    }

    #[test]
    fn probe_table_marks_missing_quantity() {
        let page = ProbePage::new(vec![ProbeRecord {
            title: "Draft Quilt".to_string(),
            status: Some("DRAFT".to_string()),
            image_url: None,
            current_quantity: None,
        }]);
        let out = render_table(&page, PLAIN);
        assert!(out.starts_with("All Products Test [ok] 1 product"));
        assert!(out.contains("N/A"));
        assert!(out.contains("DRAFT"));
    }
}
