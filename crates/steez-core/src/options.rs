//! # Form Options
//!
//! Default choice lists offered by the sale entry form.
//!
//! These are presentation hints. A sale with a supplier, party or work type
//! outside these lists is stored like any other.

/// Suppliers offered by default.
pub const DEFAULT_SUPPLIERS: &[&str] = &["KONE", "Walk-In", "Other"];

/// Client parties offered by default.
pub const DEFAULT_PARTIES: &[&str] = &[
    "SAB MALTINGS",
    "BOUTIQUE HOTEL ORMONDE",
    "THE EMERALDS",
    "SLIM HOSPITALITY-FRB",
    "LUCID SANDOWN",
    "THE VERGE SHOPPING CENTER",
    "THE MELROSE",
];

/// Work type categories offered by default.
pub const DEFAULT_WORK_TYPES: &[&str] = &["Fycor", "Quality", "Lifts", "Dismantling", "Installation"];
