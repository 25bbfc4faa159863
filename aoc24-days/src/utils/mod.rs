//! Shared algorithms used across solutions

pub mod ordering;
