//! Console front-end for the oxo game engine
//!
//! This module provides the command-line interface for playing against the
//! engine, asking it for a move, and evaluating it over many games.

pub mod commands;
pub mod config;
pub mod output;
