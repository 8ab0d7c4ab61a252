// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for nutrition-tracker
// ABOUTME: Output rendering shared by the food and intake commands

pub mod display;
