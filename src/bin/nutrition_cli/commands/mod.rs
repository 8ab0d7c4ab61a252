// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrition-tracker
// ABOUTME: Provides access to food catalog and intake log commands

pub mod food;
pub mod intake;
