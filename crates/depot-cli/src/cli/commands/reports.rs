//! Report command handlers.

use anyhow::Result;
use depot_core::config::Config;
use depot_core::format;

pub async fn popular(config: &Config, limit: u32) -> Result<()> {
    let rows = super::client(config).popular_products(limit).await?;
    if rows.is_empty() {
        println!("No order history yet.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Product", "Units ordered"]);
    for row in &rows {
        table.add_row(vec![
            row.id.to_string(),
            row.name.clone(),
            row.total_ordered.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn inventory(config: &Config) -> Result<()> {
    let summary = super::client(config).inventory_summary().await?;
    let locale = &config.locale;

    println!(
        "Products:     {}",
        format::format_number(locale, summary.total_products as f64)
    );
    println!(
        "Units:        {}",
        format::format_number(locale, summary.total_units as f64)
    );
    println!("Low stock:    {}", summary.low_stock_count);
    println!("Out of stock: {}", summary.out_of_stock_count);

    if !summary.low_stock_products.is_empty() {
        let mut table = super::table(&["ID", "Product", "Category", "Quantity"]);
        for row in &summary.low_stock_products {
            table.add_row(vec![
                row.id.to_string(),
                row.nombre.clone(),
                row.categoria.clone(),
                row.cantidad.to_string(),
            ]);
        }
        println!("{table}");
    }

    if summary.by_category.is_empty() {
        return Ok(());
    }
    let mut table = super::table(&["Category", "Products"]);
    for (category, count) in &summary.by_category {
        table.add_row(vec![category.clone(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub async fn status(config: &Config) -> Result<()> {
    let by_status = super::client(config).orders_by_status().await?;
    if by_status.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }

    let mut table = super::table(&["Status", "Orders"]);
    for (status, count) in &by_status {
        table.add_row(vec![status.clone(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}
