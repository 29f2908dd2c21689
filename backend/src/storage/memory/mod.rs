//! In-memory repositories.
//!
//! Each repository wraps its collection in `Arc<RwLock<..>>`, so clones share
//! one registry and writers are serialized. A poisoned lock is recovered
//! rather than propagated: every write replaces whole entries, so the data is
//! still consistent after a panic elsewhere.

pub mod client_repository;
pub mod movie_repository;
pub mod showroom_repository;
pub mod ticket_repository;

pub use client_repository::ClientRepository;
pub use movie_repository::MovieRepository;
pub use showroom_repository::ShowroomRepository;
pub use ticket_repository::TicketRepository;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
