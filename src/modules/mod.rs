//! Modules layer - adapters for external infrastructure

pub mod storage;
