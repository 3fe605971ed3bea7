//! Domain rules shared by the repository and HTTP layers.
//!
//! Nothing in here touches the database or the network: slug derivation,
//! status lifecycle, list parameter parsing, lead choice lists and
//! field-level validation errors.

pub mod career;
pub mod dynamic_form;
pub mod error;
pub mod leads;
pub mod listing;
pub mod search;
pub mod slug;
pub mod social;
pub mod status;
pub mod taxonomy;
pub mod types;
pub mod validation;
