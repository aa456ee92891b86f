//! Catalog import from CSV sources

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::CatalogTree;

/// One row of the catalog source. Serde renames map the CSV header names;
/// price and quantity stay raw text here because both allow formatting
/// (grouping commas) and absence.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Price")]
    price: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: Option<String>,
}

/// Reads a catalog CSV from disk and builds the product tree.
#[instrument(level = "debug")]
pub fn load_catalog(path: &Path) -> ApplicationResult<CatalogTree> {
    let raw = fs::read_to_string(path).map_err(|source| ApplicationError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read catalog source: {}", path.display());
    parse_catalog(&raw)
}

/// Builds the product tree from CSV text.
///
/// One `add_product` call per record in file order, so duplicate rows
/// overwrite earlier ones. A UTF-8 byte-order mark from spreadsheet
/// exports is tolerated.
pub fn parse_catalog(data: &str) -> ApplicationResult<CatalogTree> {
    let data = data.strip_prefix('\u{feff}').unwrap_or(data);
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut catalog = CatalogTree::new();

    for (index, result) in reader.deserialize::<CatalogRow>().enumerate() {
        // Data rows start at line 2, after the header
        let row_number = index + 2;
        let row = result.map_err(|source| ApplicationError::MalformedRow {
            row: row_number,
            source,
        })?;
        let price = parse_price(row.price.as_deref(), row_number)?;
        let quantity = parse_quantity(row.quantity.as_deref(), row_number)?;
        catalog.add_product(&row.department, &row.category, &row.product, price, quantity);
    }

    debug!(
        "catalog loaded: {} products in {} departments",
        catalog.product_count(),
        catalog.departments().len()
    );
    Ok(catalog)
}

/// Parses a price cell. Grouping commas are stripped, missing or empty
/// cells default to zero, negative prices are rejected.
fn parse_price(cell: Option<&str>, row: usize) -> ApplicationResult<Decimal> {
    let raw = cell.unwrap_or("");
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let price: Decimal = cleaned.parse().map_err(|_| ApplicationError::InvalidPrice {
        row,
        value: raw.to_string(),
    })?;
    if price < Decimal::ZERO {
        return Err(ApplicationError::InvalidPrice {
            row,
            value: raw.to_string(),
        });
    }
    Ok(price)
}

/// Parses a quantity cell. Missing or empty cells default to zero;
/// anything that is not a whole non-negative number is rejected.
fn parse_quantity(cell: Option<&str>, row: usize) -> ApplicationResult<u32> {
    let raw = cell.unwrap_or("");
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned
        .parse::<u32>()
        .map_err(|_| ApplicationError::InvalidQuantity {
            row,
            value: raw.to_string(),
        })
}
