//! Property-based tests for the polynomial kinds and reconciliation.
