//! lamina: generic matrix and vector containers with shared row/column views.
//!
//! This crate provides a row-major `Matrix<T>`, owned `RowVector<T>` /
//! `ColVector<T>` specializations, and non-owning `RowView<T>` / `ColView<T>`
//! that alias a row or column of a parent matrix. All four vector kinds
//! share one capability trait (`Vector`), and `dot` / `sum` / `prod` operate
//! on that contract uniformly.
//!
//! Storage is held behind a reference-counted cell shared between a matrix
//! and its views, so mutation through either side is visible through the
//! other and a view can never outlive the buffer it aliases. The design
//! favors small, testable modules; runtime safety checks are selected once
//! per build through Cargo features and compile out entirely when disabled.

mod checks;

pub mod config;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod vector;

pub use error::Error;
pub use matrix::Matrix;
pub use vector::{dot, prod, sum, ColVector, ColView, Orientation, RowVector, RowView, Vector};
