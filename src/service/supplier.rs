//! Supplier service

use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::supplier::{Supplier, SupplierInput};

fn validate_fields(input: &SupplierInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if input.address.trim().is_empty() {
        return Err(AppError::validation("Address is required"));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: SupplierInput) -> AppResult<Supplier> {
    validate_fields(&input)?;
    if db::suppliers::address_taken(pool, input.address.trim(), None).await? {
        return Err(AppError::validation("Address already exists"));
    }
    Ok(db::suppliers::insert(pool, &input).await?)
}

pub async fn get(pool: &PgPool, id: i64) -> AppResult<Supplier> {
    db::suppliers::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))
}

pub async fn list(pool: &PgPool) -> AppResult<Vec<Supplier>> {
    Ok(db::suppliers::list(pool).await?)
}

pub async fn update(pool: &PgPool, id: i64, input: SupplierInput) -> AppResult<Supplier> {
    validate_fields(&input)?;
    if db::suppliers::address_taken(pool, input.address.trim(), Some(id)).await? {
        return Err(AppError::validation("Address already exists"));
    }
    db::suppliers::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))
}

pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
    let deleted = db::suppliers::delete(pool, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Supplier not found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        let err = validate_fields(&SupplierInput {
            name: "".into(),
            address: "Km 4".into(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = validate_fields(&SupplierInput {
            name: "Granja Sol".into(),
            address: " ".into(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Address is required");
    }
}
