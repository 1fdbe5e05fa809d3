//! In-process store. Backs the router in tests and can simulate an unreachable database.

use crate::error::AppError;
use crate::model::{Employee, EmployeeDraft};
use crate::store::{EmployeeSession, EmployeeStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    rows: Vec<Employee>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryEmployeeStore {
    table: Arc<Mutex<Table>>,
    offline: AtomicBool,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline, acquiring a session or pinging fails as if the database were down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        lock(&self.table).map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

fn lock(table: &Mutex<Table>) -> Result<MutexGuard<'_, Table>, AppError> {
    table
        .lock()
        .map_err(|_| AppError::StoreUnavailable("memory store lock poisoned".into()))
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn session(&self) -> Result<Box<dyn EmployeeSession>, AppError> {
        self.check_online()?;
        Ok(Box::new(MemoryEmployeeSession {
            table: Arc::clone(&self.table),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

pub struct MemoryEmployeeSession {
    table: Arc<Mutex<Table>>,
}

#[async_trait]
impl EmployeeSession for MemoryEmployeeSession {
    async fn list(&mut self) -> Result<Vec<Employee>, AppError> {
        Ok(lock(&self.table)?.rows.clone())
    }

    async fn find_by_employee_id(&mut self, employee_id: &str) -> Result<Option<Employee>, AppError> {
        let table = lock(&self.table)?;
        Ok(table.rows.iter().find(|e| e.employee_id == employee_id).cloned())
    }

    async fn insert(&mut self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let mut table = lock(&self.table)?;
        table.last_id += 1;
        let employee = draft.into_employee(table.last_id);
        table.rows.push(employee.clone());
        Ok(employee)
    }
}
