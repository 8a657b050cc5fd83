use crate::dto::product_dto::CreateProductPayload;
use crate::error::Result;
use crate::models::product::Product;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateProductPayload) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, is_available)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, is_available, created_at
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.is_available)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn list_available(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, is_available, created_at
            FROM products
            WHERE is_available = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, is_available, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Full replace: every mutable column takes the payload value as-is.
    /// `id` and `created_at` stay storage-owned.
    pub async fn update(&self, id: i32, payload: CreateProductPayload) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, is_available = $5
            WHERE id = $1
            RETURNING id, name, description, price, is_available, created_at
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.is_available)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Soft delete: the row is kept, only flagged unavailable.
    /// Returns false when no row matched the id.
    pub async fn soft_delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("UPDATE products SET is_available = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
