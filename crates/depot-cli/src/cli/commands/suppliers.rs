//! Supplier command handlers.

use anyhow::Result;
use depot_core::config::Config;
use depot_core::validate;
use depot_types::NewSupplier;

pub async fn list(config: &Config) -> Result<()> {
    let suppliers = super::client(config).suppliers().await?;
    if suppliers.is_empty() {
        println!("No suppliers.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Name", "Phone", "Email", "Products"]);
    for supplier in &suppliers {
        table.add_row(vec![
            supplier.id.to_string(),
            supplier.name.clone(),
            supplier.phone.clone().unwrap_or_default(),
            supplier.email.clone().unwrap_or_default(),
            supplier.product_count.unwrap_or(0).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn add(config: &Config, name: &str, phone: &str, email: &str) -> Result<()> {
    if validate::is_blank(name) {
        anyhow::bail!("supplier name is required");
    }
    if !validate::is_blank(phone) && !validate::is_phone(phone) {
        anyhow::bail!("phone must be 8 to 15 digits");
    }
    if !validate::is_blank(email) && !validate::is_email(email) {
        anyhow::bail!("email address is not valid");
    }

    let ack = super::client(config)
        .create_supplier(&NewSupplier {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        })
        .await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Supplier created.".to_string())
    );
    Ok(())
}

pub async fn remove(config: &Config, id: i64, yes: bool) -> Result<()> {
    super::ensure_confirmed(yes, &format!("delete supplier {id}"))?;
    let ack = super::client(config).delete_supplier(id).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Supplier deleted.".to_string())
    );
    Ok(())
}

pub async fn link(config: &Config, supplier_id: i64, product_id: i64) -> Result<()> {
    let ack = super::client(config)
        .link_supplier_product(supplier_id, product_id)
        .await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Product linked.".to_string())
    );
    Ok(())
}

pub async fn unlink(config: &Config, supplier_id: i64, product_id: i64) -> Result<()> {
    let ack = super::client(config)
        .unlink_supplier_product(supplier_id, product_id)
        .await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Product unlinked.".to_string())
    );
    Ok(())
}

pub async fn products(config: &Config, id: i64) -> Result<()> {
    let products = super::client(config).supplier_products(id).await?;
    if products.is_empty() {
        println!("This supplier carries no products.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Name", "Price"]);
    for product in &products {
        table.add_row(vec![
            product.id.to_string(),
            product.name.clone(),
            depot_core::format::format_currency(&config.locale, product.price),
        ]);
    }
    println!("{table}");
    Ok(())
}
