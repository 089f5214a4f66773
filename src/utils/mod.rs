// ABOUTME: Utility modules for common functionality across the planner
// ABOUTME: Contains shared numeric helpers used by profile math and meal composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Decimal rounding helpers
pub mod rounding;
