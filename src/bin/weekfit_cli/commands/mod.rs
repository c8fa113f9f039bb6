// ABOUTME: Re-exports command modules for the weekfit CLI
// ABOUTME: Provides account, schedule, activity and tracking commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod account;
pub mod activities;
pub mod track;
pub mod week;
