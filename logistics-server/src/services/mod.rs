//! Business operations over the store.
//!
//! Each service validates raw input into domain records, enforces
//! uniqueness with a precise conflict message, and hands off to its
//! repository. Services know nothing about HTTP.

mod accounts;
mod companies;
mod packages;

pub use accounts::{AccountError, AccountService, LOGIN_SUCCESS_MESSAGE, LoginOutcome};
pub use companies::{CompanyError, CompanyService};
pub use packages::{PACKAGE_DELETED_MESSAGE, PackageError, PackageService};
