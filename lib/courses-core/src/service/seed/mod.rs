use std::sync::Arc;

use tokio::sync::Mutex;

use crate::repository::unit_of_work::UnitOfWork;

pub mod dto;
pub mod service;

mod validator;


#[derive(Clone)]
pub struct SeedService {
    unit_of_work: Arc<dyn UnitOfWork>,
    write_lock: Arc<Mutex<()>>,
}

impl SeedService {
    pub fn new(unit_of_work: Arc<dyn UnitOfWork>, write_lock: Arc<Mutex<()>>) -> Self {
        Self {
            unit_of_work,
            write_lock,
        }
    }
}
