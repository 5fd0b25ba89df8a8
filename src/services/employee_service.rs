use crate::dto::employee_dto::{EmployeeForm, NewEmployee, UpdateOutcome};
use crate::error::Result;
use crate::models::employee::Employee;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

const EMPLOYEE_COLUMNS: &str = "id, code, contractor_name, company, email, phone, category, \
     start_date, end_date, cost, status, image, created_at, updated_at";

/// Columns matched case-insensitively by free-text search.
const TEXT_SEARCH_COLUMNS: [&str; 6] = [
    "code",
    "contractor_name",
    "company",
    "email",
    "phone",
    "category",
];

/// String-encoded date columns, matched case-sensitively.
const DATE_SEARCH_COLUMNS: [&str; 2] = ["start_date", "end_date"];

#[derive(Clone)]
pub struct EmployeeService {
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: NewEmployee) -> Result<Employee> {
        let sql = format!(
            "INSERT INTO employees
                 (code, contractor_name, company, email, phone, category,
                  start_date, end_date, cost, status, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(&payload.code)
            .bind(&payload.contractor_name)
            .bind(&payload.company)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.category)
            .bind(&payload.start_date)
            .bind(&payload.end_date)
            .bind(payload.cost)
            .bind(&payload.status)
            .bind(&payload.image)
            .fetch_one(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>> {
        let sql = format!(
            "SELECT {} FROM employees ORDER BY created_at",
            EMPLOYEE_COLUMNS
        );
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    /// Partial update over the canonical columns; absent fields keep their
    /// stored value. Rows matched equals rows written in this store.
    pub async fn update(&self, id: Uuid, changes: EmployeeForm) -> Result<UpdateOutcome> {
        let res = sqlx::query(
            "UPDATE employees SET
                 code = COALESCE($2, code),
                 contractor_name = COALESCE($3, contractor_name),
                 company = COALESCE($4, company),
                 email = COALESCE($5, email),
                 phone = COALESCE($6, phone),
                 category = COALESCE($7, category),
                 start_date = COALESCE($8, start_date),
                 end_date = COALESCE($9, end_date),
                 cost = COALESCE($10, cost),
                 status = COALESCE($11, status),
                 image = COALESCE($12, image),
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.code)
        .bind(&changes.contractor_name)
        .bind(&changes.company)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(&changes.category)
        .bind(&changes.start_date)
        .bind(&changes.end_date)
        .bind(changes.cost)
        .bind(&changes.status)
        .bind(&changes.image)
        .execute(&self.pool)
        .await?;

        let affected = res.rows_affected();
        Ok(UpdateOutcome {
            matched_count: affected,
            modified_count: affected,
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let res = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    /// Free-text search: one OR across substring matches on the text and
    /// date columns, plus exact cost equality when the key is
    /// numeric-shaped. The numeric disjunct is additional, never exclusive.
    pub async fn search(&self, key: &str) -> Result<Vec<Employee>> {
        let (where_clause, patterns, cost) = build_search_filter(key);
        let sql = format!(
            "SELECT {} FROM employees WHERE {}",
            EMPLOYEE_COLUMNS, where_clause
        );

        let mut query = sqlx::query_as::<_, Employee>(&sql);
        for pattern in &patterns {
            query = query.bind(pattern);
        }
        if let Some(cost) = cost {
            query = query.bind(cost);
        }

        let employees = query.fetch_all(&self.pool).await?;
        Ok(employees)
    }
}

fn build_search_filter(key: &str) -> (String, Vec<String>, Option<Decimal>) {
    let mut clauses = Vec::new();
    let mut patterns: Vec<String> = Vec::new();

    for column in TEXT_SEARCH_COLUMNS {
        clauses.push(format!("{} ILIKE ${}", column, patterns.len() + 1));
        patterns.push(format!("%{}%", key));
    }
    for column in DATE_SEARCH_COLUMNS {
        clauses.push(format!("{} LIKE ${}", column, patterns.len() + 1));
        patterns.push(format!("%{}%", key));
    }

    let cost = Decimal::from_str(key).ok();
    if cost.is_some() {
        clauses.push(format!("cost = ${}", patterns.len() + 1));
    }

    (clauses.join(" OR "), patterns, cost)
}
