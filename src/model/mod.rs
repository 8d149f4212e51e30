//! Core data structures for composition profiles and reaction networks.
//!
//! This module provides the types that flow through `compo-forge`:
//!
//! - [`element`] – Periodic table lookup by symbol and atomic number.
//! - [`isotope`] – Network isotope tokens (`he4`, `fe56`, `neut`) and their `(Z, A)` order.
//! - [`sample`] – A single row of named mass fractions.
//! - [`transition`] – A composition jump at an exterior mass coordinate.
//! - [`profile`] – The blended composition table with growable columns.
//! - [`network`] – The ordered isotope list a solver configuration tracks.
//!
//! Inputs ([`CompositionSample`], [`Transition`], [`Network`]) are immutable once
//! built; [`CompositionProfile`] is the one type the [`crate::blend`] pipeline
//! mutates, and only through its explicit column operations.
//!
//! [`CompositionSample`]: sample::CompositionSample
//! [`Transition`]: transition::Transition
//! [`Network`]: network::Network
//! [`CompositionProfile`]: profile::CompositionProfile

pub mod element;
pub mod error;
pub mod isotope;
pub mod network;
pub mod profile;
pub mod sample;
pub mod transition;
