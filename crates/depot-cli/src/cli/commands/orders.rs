//! Order command handlers.

use anyhow::{Context, Result};
use depot_core::config::Config;
use depot_core::{format, validate};
use depot_types::{NewOrder, NewOrderItem};

pub async fn list(config: &Config) -> Result<()> {
    let orders = super::client(config).orders().await?;
    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }

    let mut table = super::table(&["ID", "Ordered", "Received", "Status", "Lines"]);
    for order in &orders {
        table.add_row(vec![
            order.id.to_string(),
            format::format_date(&config.locale, order.order_date.as_deref()),
            format::format_date(&config.locale, order.received_date.as_deref()),
            order.status.to_string(),
            order.product_count.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn show(config: &Config, id: i64) -> Result<()> {
    let order = super::client(config).order(id).await?;
    println!("ID:       {}", order.id);
    println!(
        "Ordered:  {}",
        format::format_date(&config.locale, order.order_date.as_deref())
    );
    println!(
        "Received: {}",
        format::format_date(&config.locale, order.received_date.as_deref())
    );
    println!("Status:   {}", order.status);

    if order.products.is_empty() {
        println!("No lines.");
        return Ok(());
    }
    let mut table = super::table(&["Product ID", "Product", "Quantity"]);
    for line in &order.products {
        table.add_row(vec![
            line.product_id.to_string(),
            line.product_name.clone(),
            line.quantity.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn add(config: &Config, items: &[String]) -> Result<()> {
    let items = parse_items(items)?;
    let ack = super::client(config)
        .create_order(&NewOrder { items })
        .await?;
    match ack.order_id {
        Some(order_id) => println!("Created order {order_id}"),
        None => println!(
            "{}",
            ack.message.unwrap_or_else(|| "Order created.".to_string())
        ),
    }
    Ok(())
}

pub async fn confirm(config: &Config, id: i64) -> Result<()> {
    let ack = super::client(config).confirm_order(id).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Order confirmed.".to_string())
    );
    Ok(())
}

pub async fn remove(config: &Config, id: i64, yes: bool) -> Result<()> {
    super::ensure_confirmed(yes, &format!("delete order {id}"))?;
    let ack = super::client(config).delete_order(id).await?;
    println!(
        "{}",
        ack.message.unwrap_or_else(|| "Order deleted.".to_string())
    );
    Ok(())
}

/// Parses `PRODUCT_ID:QUANTITY` pairs.
fn parse_items(raw: &[String]) -> Result<Vec<NewOrderItem>> {
    let mut items = Vec::with_capacity(raw.len());
    for pair in raw {
        let (product, quantity) = pair
            .split_once(':')
            .with_context(|| format!("'{pair}' is not PRODUCT_ID:QUANTITY"))?;
        let product_id: i64 = product
            .trim()
            .parse()
            .with_context(|| format!("'{product}' is not a product id"))?;
        let quantity: i64 = quantity
            .trim()
            .parse()
            .with_context(|| format!("'{quantity}' is not a quantity"))?;
        if !validate::is_positive_quantity(quantity) {
            anyhow::bail!("quantity must be positive in '{pair}'");
        }
        items.push(NewOrderItem {
            product_id,
            quantity,
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_pairs() {
        let items = parse_items(&["3:10".to_string(), " 7 : 2 ".to_string()]).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, 3);
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[1].product_id, 7);
        assert_eq!(items[1].quantity, 2);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_items(&["3".to_string()]).is_err());
        assert!(parse_items(&["a:b".to_string()]).is_err());
        assert!(parse_items(&["3:0".to_string()]).is_err());
        assert!(parse_items(&["3:-1".to_string()]).is_err());
    }
}
