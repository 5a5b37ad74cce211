pub mod contact;
pub mod controller;
pub mod manager;
pub mod search;

use crate::prelude::{AppError, ContactStore};
use uuid::Uuid;
