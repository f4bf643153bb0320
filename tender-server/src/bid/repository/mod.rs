use {
    std::fmt::Debug,
    tokio::sync::Mutex,
};

mod add_bid;
mod file_storage;
mod get_bids;
mod models;

pub use {
    file_storage::*,
    models::*,
};

/// Bids of all tenders, kept as a single collection that is rewritten in full on every change.
///
/// Writes from this process are serialized. Other processes writing the same store are not
/// coordinated with, so their updates can still be lost.
#[derive(Debug)]
pub struct Repository {
    storage:    Box<dyn Storage>,
    write_lock: Mutex<()>,
}

impl Repository {
    pub fn new(storage: impl Storage) -> Self {
        Self {
            storage:    Box::new(storage),
            write_lock: Mutex::new(()),
        }
    }
}
