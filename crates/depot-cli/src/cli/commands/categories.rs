//! Category command handlers.

use anyhow::Result;
use depot_core::config::Config;
use depot_core::validate;
use depot_types::NewCategory;

pub async fn list(config: &Config) -> Result<()> {
    let categories = super::client(config).categories().await?;
    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Name", "Description", "Products"]);
    for category in &categories {
        table.add_row(vec![
            category.id.to_string(),
            category.name.clone(),
            category.descripcion.clone(),
            category.product_count.unwrap_or(0).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn show(config: &Config, id: i64) -> Result<()> {
    let category = super::client(config).category(id).await?;
    println!("ID:          {}", category.id);
    println!("Name:        {}", category.name);
    println!("Description: {}", category.descripcion);
    Ok(())
}

pub async fn add(config: &Config, name: &str, description: &str) -> Result<()> {
    let body = validated(name, description)?;
    let ack = super::client(config).create_category(&body).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Category created.".to_string())
    );
    Ok(())
}

pub async fn update(config: &Config, id: i64, name: &str, description: &str) -> Result<()> {
    let body = validated(name, description)?;
    let ack = super::client(config).update_category(id, &body).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Category updated.".to_string())
    );
    Ok(())
}

pub async fn remove(config: &Config, id: i64, yes: bool) -> Result<()> {
    super::ensure_confirmed(yes, &format!("delete category {id}"))?;
    let ack = super::client(config).delete_category(id).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Category deleted.".to_string())
    );
    Ok(())
}

fn validated(name: &str, description: &str) -> Result<NewCategory> {
    if validate::is_blank(name) {
        anyhow::bail!("category name is required");
    }
    Ok(NewCategory {
        name: name.trim().to_string(),
        descripcion: description.trim().to_string(),
    })
}
