//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API.                                                               │
//! │                                                                     │
//! │  Desktop command                                                    │
//! │       │                                                             │
//! │       │  db.products().list()                                       │
//! │       │  ↓                                                          │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── list(&self)                                                    │
//! │  ├── insert(&self, name, price, quantity)                           │
//! │  ├── update(&self, product)                                         │
//! │  └── delete(&self, id)                                              │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                     │
//! │  • SQL is isolated in one place                                     │
//! │  • Can swap database implementations                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Product listing and CRUD
//! - [`SaleRepository`] - The sell operation and the sales listing
//!
//! [`ProductRepository`]: product::ProductRepository
//! [`SaleRepository`]: sale::SaleRepository

pub mod product;
pub mod sale;
