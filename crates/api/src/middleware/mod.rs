//! Request guards.
//!
//! - [`staff::RequireStaff`] -- Requires the administrative bearer token.

pub mod staff;
