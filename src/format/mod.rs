//! Output formatting for products and parsed queries (table, JSON, markdown, CSV).

use crate::catalog::Product;
use crate::config::OutputFormat;
use crate::query::ParsedQuery;

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No matching products.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats the structured form of a query.
    pub fn format_query(&self, parsed: &ParsedQuery) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(parsed).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Markdown => query_fields(parsed)
                .into_iter()
                .map(|(key, value)| format!("- **{}:** {}", key, value))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Csv => {
                let (keys, values): (Vec<_>, Vec<_>) = query_fields(parsed)
                    .into_iter()
                    .map(|(key, value)| {
                        (key.to_lowercase().replace(' ', "_"), Self::csv_escape(&value))
                    })
                    .unzip();
                format!("{}\n{}", keys.join(","), values.join(","))
            }
            OutputFormat::Table => query_fields(parsed)
                .into_iter()
                .map(|(key, value)| format!("{:<12}{}", format!("{}:", key), value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[Product]) -> String {
        let id_width = 6;
        let price_width = 10;
        let rating_width = 6;
        let category_width = 12;
        let name_width = 40;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<rating_width$}  {:<category_width$}  {}",
            "ID", "Price", "Rating", "Category", "Name"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<rating_width$}  {:-<category_width$}  {:-<name_width$}",
            "", "", "", "", ""
        ));

        for product in products {
            lines.push(format!(
                "{:<id_width$}  {:>price_width$}  {:>rating_width$}  {:<category_width$}  {}",
                product.id,
                format!("{:.2}", product.price),
                format!("{:.1}", product.rating),
                product.category.name(),
                truncate(&product.name, name_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Name | Category | Price | Rating |".to_string());
        lines.push("|----|------|----------|-------|--------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {} | {} | {:.2} | {:.1} |",
                product.id,
                product.name.replace('|', "\\|"),
                product.category,
                product.price,
                product.rating
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,name,category,price,rating,description".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{},{},{}",
                product.id,
                Self::csv_escape(&product.name),
                product.category,
                product.price,
                product.rating,
                Self::csv_escape(&product.description)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn query_fields(parsed: &ParsedQuery) -> Vec<(&'static str, String)> {
    let bound = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());

    vec![
        ("Category", parsed.category.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())),
        ("Price min", bound(parsed.price_min)),
        ("Price max", bound(parsed.price_max)),
        ("Min rating", bound(parsed.min_rating)),
        (
            "Keywords",
            if parsed.keywords.is_empty() { "-".to_string() } else { parsed.keywords.join(" ") },
        ),
    ]
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
