//! Shared handler state.
//!
//! One SQLite connection behind a mutex. Store work runs on actix's blocking
//! pool so request workers never wait on SQLite directly.

use actix_web::web;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `job` with exclusive access to the connection.
    pub async fn run<T, F>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> std::result::Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        web::block(move || {
            let conn = db.lock();
            job(&conn)
        })
        .await?
    }
}
