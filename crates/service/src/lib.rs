//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod industry_service;
pub mod company_service;
pub mod macro_indicator_service;
pub mod news_service;
#[cfg(test)]
pub mod test_support;
