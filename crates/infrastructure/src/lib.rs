//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_linked_record_repository;
mod postgres_linked_record_repository;

pub use in_memory_linked_record_repository::InMemoryLinkedRecordRepository;
pub use postgres_linked_record_repository::PostgresLinkedRecordRepository;
