//! Order-line-item service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::order_item::{OrderItem, OrderItemInput};

fn validate_fields(input: &OrderItemInput) -> AppResult<()> {
    if input.quantity <= 0 {
        return Err(AppError::validation("The quantity must be greater than 0"));
    }
    if input.unit_price <= 0.0 {
        return Err(AppError::validation("The unit price must be greater than 0"));
    }
    if input.sub_total <= 0.0 {
        return Err(AppError::validation("The sub total must be greater than 0"));
    }
    Ok(())
}

async fn check_references(pool: &PgPool, input: &OrderItemInput) -> AppResult<()> {
    if db::orders::find_by_id(pool, input.order_id).await?.is_none() {
        return Err(AppError::not_found("Order not found"));
    }
    if db::eggs::find_by_id(pool, input.egg_id).await?.is_none() {
        return Err(AppError::not_found("Egg not found"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: OrderItemInput) -> AppResult<OrderItem> {
    validate_fields(&input)?;
    check_references(pool, &input).await?;
    Ok(db::order_items::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<OrderItem> {
    db::order_items::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("OrderEgg not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<OrderItem>> {
    Ok(db::order_items::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: OrderItemInput) -> AppResult<OrderItem> {
    db::order_items::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("OrderEgg not found"))?;
    validate_fields(&input)?;
    check_references(pool, &input).await?;
    db::order_items::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("OrderEgg not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::order_items::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("OrderEgg not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> OrderItemInput {
        OrderItemInput {
            quantity: 12,
            unit_price: 0.5,
            sub_total: 6.0,
            egg_id: 1,
            order_id: 1,
        }
    }

    #[test]
    fn all_amounts_must_be_positive() {
        let mut bad = input();
        bad.quantity = 0;
        assert_eq!(
            validate_fields(&bad).unwrap_err().to_string(),
            "The quantity must be greater than 0"
        );

        let mut bad = input();
        bad.unit_price = -1.0;
        assert_eq!(
            validate_fields(&bad).unwrap_err().to_string(),
            "The unit price must be greater than 0"
        );

        let mut bad = input();
        bad.sub_total = 0.0;
        assert_eq!(
            validate_fields(&bad).unwrap_err().to_string(),
            "The sub total must be greater than 0"
        );

        assert!(validate_fields(&input()).is_ok());
    }
}
