//! Path builders for the backend's REST catalog.
//!
//! The backend scopes everything under a per-user prefix. Paths are kept
//! verbatim from the server's route table, Spanish segment names included;
//! the catalog is a fixed external contract, not something this client owns.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

// Categories ("clasificaciones")

pub fn categories(user_id: i64) -> String {
    format!("/usuario/{user_id}/clasificaciones")
}

pub fn category(user_id: i64, category_id: i64) -> String {
    format!("/usuario/{user_id}/clasificaciones/{category_id}")
}

// Products ("articulos"). There is no GET detail route; `product` only
// serves PUT and DELETE.

pub fn products(user_id: i64) -> String {
    format!("/usuario/{user_id}/articulos")
}

pub fn product(user_id: i64, product_id: i64) -> String {
    format!("/usuario/{user_id}/articulos/{product_id}")
}

// Inventory ("inventario")

pub fn stock(user_id: i64) -> String {
    format!("/usuario/{user_id}/inventario")
}

pub fn stock_item(user_id: i64, product_id: i64) -> String {
    format!("/usuario/{user_id}/inventario/{product_id}")
}

pub fn stock_alert(user_id: i64) -> String {
    format!("/usuario/{user_id}/inventario/alerta-bajo")
}

pub fn stock_stats(user_id: i64) -> String {
    format!("/usuario/{user_id}/inventario/estadisticas")
}

// Suppliers ("distribuidores"). The link/unlink sub-resource uses the
// "/proveedores" spelling on the server; that spelling is authoritative.

pub fn suppliers(user_id: i64) -> String {
    format!("/usuario/{user_id}/distribuidores")
}

pub fn supplier(user_id: i64, supplier_id: i64) -> String {
    format!("/usuario/{user_id}/distribuidores/{supplier_id}")
}

pub fn supplier_product_link(user_id: i64, supplier_id: i64, product_id: i64) -> String {
    format!("/usuario/{user_id}/proveedores/{supplier_id}/productos/{product_id}")
}

pub fn supplier_products(user_id: i64, supplier_id: i64) -> String {
    format!("/usuario/{user_id}/distribuidores/{supplier_id}/productos")
}

pub fn product_suppliers(user_id: i64, product_id: i64) -> String {
    format!("/usuario/{user_id}/articulos/{product_id}/proveedores")
}

// Orders ("pedidos")

pub fn orders(user_id: i64) -> String {
    format!("/usuario/{user_id}/pedidos")
}

pub fn order(user_id: i64, order_id: i64) -> String {
    format!("/usuario/{user_id}/pedidos/{order_id}")
}

pub fn order_confirm(user_id: i64, order_id: i64) -> String {
    format!("/usuario/{user_id}/pedidos/{order_id}/confirmar")
}

// Reports ("informes"), all read-only aggregates

pub fn report_popular(user_id: i64) -> String {
    format!("/usuario/{user_id}/informes/articulos-populares")
}

pub fn report_inventory(user_id: i64) -> String {
    format!("/usuario/{user_id}/informes/resumen-inventario")
}

pub fn report_orders_by_status(user_id: i64) -> String {
    format!("/usuario/{user_id}/informes/pedidos-por-estado")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_user_scoped() {
        assert_eq!(categories(7), "/usuario/7/clasificaciones");
        assert_eq!(category(7, 3), "/usuario/7/clasificaciones/3");
        assert_eq!(product(7, 3), "/usuario/7/articulos/3");
        assert_eq!(order_confirm(7, 12), "/usuario/7/pedidos/12/confirmar");
    }

    #[test]
    fn link_uses_server_spelling() {
        assert_eq!(
            supplier_product_link(1, 2, 3),
            "/usuario/1/proveedores/2/productos/3"
        );
    }
}
