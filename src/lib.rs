pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{employee_service::EmployeeService, user_service::UserService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub employee_service: EmployeeService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let employee_service = EmployeeService::new(pool.clone());

        Self {
            pool,
            user_service,
            employee_service,
        }
    }
}
