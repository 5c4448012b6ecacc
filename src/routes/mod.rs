//! Route modules for FRA Atlas Server

pub mod eligibility;
pub mod extract;
pub mod frontend;
