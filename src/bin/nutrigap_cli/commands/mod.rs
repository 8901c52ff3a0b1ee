// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports command modules for nutrigap-cli
// ABOUTME: Provides analysis, recommendation, and nutrient catalog commands

pub mod analysis;
pub mod catalog;
