//! Stock command handlers.

use anyhow::Result;
use depot_core::config::Config;
use depot_core::format;

pub async fn list(config: &Config) -> Result<()> {
    let stock = super::client(config).stock().await?;
    if stock.is_empty() {
        println!("No stock records.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Product", "Category", "Price", "Quantity"]);
    for item in &stock {
        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category_name.clone(),
            format::format_currency(&config.locale, item.price),
            item.quantity.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn set(config: &Config, product_id: i64, quantity: i64) -> Result<()> {
    if quantity < 0 {
        anyhow::bail!("quantity cannot be negative");
    }
    let ack = super::client(config)
        .update_stock(product_id, quantity)
        .await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Stock updated.".to_string())
    );
    Ok(())
}

pub async fn low(config: &Config) -> Result<()> {
    let stock = super::client(config).low_stock().await?;
    if stock.is_empty() {
        println!("No low-stock products.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Product", "Category", "Quantity"]);
    for item in &stock {
        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.category_name.clone(),
            item.quantity.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn stats(config: &Config) -> Result<()> {
    let stats = super::client(config).stock_stats().await?;
    let locale = &config.locale;
    println!(
        "Products:     {}",
        format::format_number(locale, stats.total_products as f64)
    );
    println!(
        "Units:        {}",
        format::format_number(locale, stats.total_units as f64)
    );
    println!("Low stock:    {}", stats.low_stock);
    println!("Out of stock: {}", stats.out_of_stock);
    Ok(())
}
