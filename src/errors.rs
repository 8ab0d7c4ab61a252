// ABOUTME: Unified error types re-exported from nutrition-core
// ABOUTME: Keeps crate::errors paths stable for the library and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrition_core::errors::*;
