//! Product command handlers.
//!
//! The backend only serves the full product listing; showing one product or
//! filtering by category happens here, over the fetched list.

use anyhow::Result;
use depot_core::config::Config;
use depot_core::{format, validate};
use depot_types::{NewProduct, Product};

pub async fn list(config: &Config, category: Option<i64>) -> Result<()> {
    let mut products = super::client(config).products().await?;
    if let Some(category_id) = category {
        products.retain(|p| p.category_id == category_id);
    }
    print_products(config, &products);
    Ok(())
}

pub async fn show(config: &Config, id: i64) -> Result<()> {
    let products = super::client(config).products().await?;
    let Some(product) = products.into_iter().find(|p| p.id == id) else {
        anyhow::bail!("product {id} not found");
    };
    println!("ID:       {}", product.id);
    println!("Name:     {}", product.name);
    println!(
        "Price:    {}",
        format::format_currency(&config.locale, product.price)
    );
    println!("Category: {}", product.category_name);
    println!("Stock:    {}", product.stock);
    Ok(())
}

pub async fn add(config: &Config, name: &str, price: f64, category: i64, stock: i64) -> Result<()> {
    if stock < 0 {
        anyhow::bail!("stock cannot be negative");
    }
    let mut body = validated(name, price, category)?;
    body.quantity = Some(stock);
    let ack = super::client(config).create_product(&body).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Product created.".to_string())
    );
    Ok(())
}

pub async fn update(config: &Config, id: i64, name: &str, price: f64, category: i64) -> Result<()> {
    let body = validated(name, price, category)?;
    let ack = super::client(config).update_product(id, &body).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Product updated.".to_string())
    );
    Ok(())
}

pub async fn remove(config: &Config, id: i64, yes: bool) -> Result<()> {
    super::ensure_confirmed(yes, &format!("delete product {id}"))?;
    let ack = super::client(config).delete_product(id).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Product deleted.".to_string())
    );
    Ok(())
}

pub async fn suppliers(config: &Config, id: i64) -> Result<()> {
    let suppliers = super::client(config).product_suppliers(id).await?;
    if suppliers.is_empty() {
        println!("No suppliers carry this product.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Name", "Phone", "Email"]);
    for supplier in &suppliers {
        table.add_row(vec![
            supplier.id.to_string(),
            supplier.name.clone(),
            supplier.phone.clone().unwrap_or_default(),
            supplier.email.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_products(config: &Config, products: &[Product]) {
    if products.is_empty() {
        println!("No products.");
        return;
    }

    let mut table = super::table(&["ID", "Name", "Price", "Category", "Stock"]);
    for product in products {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            format::format_currency(&config.locale, product.price),
            product.category_name.clone(),
            product.stock.to_string(),
        ]);
    }
    println!("{table}");
}

fn validated(name: &str, price: f64, category: i64) -> Result<NewProduct> {
    if validate::is_blank(name) {
        anyhow::bail!("product name is required");
    }
    if !validate::is_positive(price) {
        anyhow::bail!("price must be a positive number");
    }
    Ok(NewProduct {
        name: name.trim().to_string(),
        price,
        category_id: category,
        quantity: None,
    })
}
