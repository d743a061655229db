//! Customer database operations

use crate::error::Result;
use crate::models::{Customer, CustomerUpdate, NewCustomer};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(customer)
}

pub async fn get_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(customer)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Customer>> {
    let customers =
        sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY id LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await?;
    Ok(customers)
}

pub async fn create(pool: &SqlitePool, new: NewCustomer) -> Result<Customer> {
    let result = sqlx::query(
        r#"
        INSERT INTO customers (name, contact_person, email, phone, address, industry, priority_level)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.name)
    .bind(&new.contact_person)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.address)
    .bind(&new.industry)
    .bind(new.priority_level)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| crate::error::Error::Internal("customer row missing after insert".into()))
}

/// Apply a merge-patch: only supplied fields change
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    patch: CustomerUpdate,
) -> Result<Option<Customer>> {
    let Some(mut customer) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(name) = patch.name {
        customer.name = name;
    }
    if let Some(contact_person) = patch.contact_person {
        customer.contact_person = Some(contact_person);
    }
    if let Some(email) = patch.email {
        customer.email = email;
    }
    if let Some(phone) = patch.phone {
        customer.phone = phone;
    }
    if let Some(address) = patch.address {
        customer.address = Some(address);
    }
    if let Some(industry) = patch.industry {
        customer.industry = Some(industry);
    }
    if let Some(priority_level) = patch.priority_level {
        customer.priority_level = Some(priority_level);
    }

    sqlx::query(
        r#"
        UPDATE customers
        SET name = ?, contact_person = ?, email = ?, phone = ?, address = ?, industry = ?, priority_level = ?
        WHERE id = ?
        "#,
    )
    .bind(&customer.name)
    .bind(&customer.contact_person)
    .bind(&customer.email)
    .bind(&customer.phone)
    .bind(&customer.address)
    .bind(&customer.industry)
    .bind(customer.priority_level)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(customer))
}

/// Returns false when no row existed
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;

    fn sample() -> NewCustomer {
        NewCustomer {
            name: "Acme".to_string(),
            email: "office@acme.example".to_string(),
            phone: "555-0100".to_string(),
            contact_person: Some("Jo Bloggs".to_string()),
            address: None,
            industry: Some("Manufacturing".to_string()),
            priority_level: Some(2),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = init_memory().await.unwrap();

        let customer = create(&pool, sample()).await.unwrap();
        assert_eq!(customer.name, "Acme");
        assert_eq!(customer.priority_level, Some(2));

        let loaded = get(&pool, customer.id).await.unwrap().unwrap();
        assert_eq!(loaded.email, "office@acme.example");
    }

    #[tokio::test]
    async fn test_update_only_touches_supplied_fields() {
        let pool = init_memory().await.unwrap();
        let customer = create(&pool, sample()).await.unwrap();

        let patch = CustomerUpdate {
            phone: Some("555-0199".to_string()),
            ..Default::default()
        };
        let updated = update(&pool, customer.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.phone, "555-0199");
        assert_eq!(updated.name, "Acme");
        assert_eq!(updated.industry, Some("Manufacturing".to_string()));
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let pool = init_memory().await.unwrap();
        let result = update(&pool, 999, CustomerUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let pool = init_memory().await.unwrap();
        let customer = create(&pool, sample()).await.unwrap();

        assert!(delete(&pool, customer.id).await.unwrap());
        assert!(!delete(&pool, customer.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let pool = init_memory().await.unwrap();
        for i in 0..5 {
            let mut c = sample();
            c.name = format!("Customer {}", i);
            c.email = format!("c{}@example.com", i);
            create(&pool, c).await.unwrap();
        }

        let page = list(&pool, 2, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Customer 2");
        assert_eq!(page[1].name, "Customer 3");
    }
}
