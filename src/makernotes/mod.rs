//! Vendor makernote tables.
//!
//! Each submodule configures the generic directory/descriptor pattern for
//! one camera maker: its tag constants, name table, format function, and
//! semantic formatters. Adding a vendor means adding a submodule with a
//! [`VendorTable`](crate::VendorTable) static; no generic code changes.

pub mod phase_one;
