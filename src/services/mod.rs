// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod logs;
pub mod users;
pub mod workout;

pub use logs::WorkoutLogService;
pub use users::UserService;
pub use workout::WorkoutService;
