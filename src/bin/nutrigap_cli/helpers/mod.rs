// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports helper modules for nutrigap-cli
// ABOUTME: Provides request file loading and plain-text report formatting

pub mod display;
pub mod input;
