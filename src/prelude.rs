pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, sanitize_phone},
    controller::{self, Command, Controller, Filter, Row, View, ViewState},
    manager::{self, ContactManager},
    search::{self, ListSignal, filter, list_signal},
};
pub use crate::errors::AppError;
pub use crate::store::{
    self, ContactStore, JsonFileKv, KeyValueStore, LocalStorage, MemKv, StorageMediums,
    parse_storage_type,
};
pub use uuid::{self, Uuid};
