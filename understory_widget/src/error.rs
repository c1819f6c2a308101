// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the construction API.
//!
//! Dispatch itself never fails; these only surface from registration, lookups, and
//! control constructors.

use thiserror::Error;

use crate::types::WidgetId;

/// Recoverable errors from [`UiRoot`](crate::root::UiRoot) and control constructors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UiError {
    /// No widget with this id is registered.
    #[error("widget {0} not found")]
    NotFound(WidgetId),
    /// A widget with this id is already registered.
    #[error("widget {0} is already registered")]
    DuplicateId(WidgetId),
    /// Bounds with a negative or non-finite size.
    #[error("widget {id} has invalid bounds ({width} x {height})")]
    InvalidBounds {
        /// Offending widget.
        id: WidgetId,
        /// Supplied width.
        width: f64,
        /// Supplied height.
        height: f64,
    },
    /// A value range with `min > max` or non-finite endpoints.
    #[error("invalid value range [{min}, {max}]")]
    InvalidRange {
        /// Supplied minimum.
        min: f64,
        /// Supplied maximum.
        max: f64,
    },
    /// Typed access asked for a different control type than the one registered.
    #[error("widget {0} is not of the requested type")]
    TypeMismatch(WidgetId),
}

/// Result alias for engine operations.
pub type UiResult<T> = Result<T, UiError>;
