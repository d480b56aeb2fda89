use serde::Serialize;
use sw_config::StockwatchConfig;
use sw_core::CategoryDefinition;

use crate::cli::GlobalFlags;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<CategoryDefinition>,
}

impl Tabular for CategoriesResponse {
    fn heading(&self, _color: bool) -> String {
        format!("Categories ({})", self.categories.len())
    }

    fn headers(&self) -> &'static [&'static str] {
        &["slug", "tag", "title"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.categories
            .iter()
            .map(|category| {
                vec![
                    category.slug.clone(),
                    category.tag.clone(),
                    category.title.clone(),
                ]
            })
            .collect()
    }
}

/// Handle `stockwatch categories`. Needs no catalog credentials.
pub fn handle(config: &StockwatchConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = config.category_registry()?;
    output(
        &CategoriesResponse {
            categories: registry.iter().cloned().collect(),
        },
        flags.format,
    )
}
