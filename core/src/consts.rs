/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;
use std::time::Duration;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Lifetime and idle timeout of the pooled connection to an in-memory database.
pub const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Seed employee with the positions of its department and role in
/// [`SEED_DEPARTMENTS`] and [`SEED_ROLES`].
#[derive(Debug, Clone, Copy)]
pub struct SeedEmployee {
    pub name: &'static str,
    pub email: &'static str,
    pub department: usize,
    pub role: usize,
}

pub const SEED_DEPARTMENTS: [&str; 2] = ["Engineering", "Marketing"];

pub const SEED_ROLES: [&str; 3] = [
    "Software Engineer",
    "Marketing Specialist",
    "Product Manager",
];

pub const SEED_EMPLOYEES: [SeedEmployee; 3] = [
    SeedEmployee {
        name: "Rahul Sharma",
        email: "rahul.sharma@example.com",
        department: 0,
        role: 0,
    },
    SeedEmployee {
        name: "Priya Singh",
        email: "priya.singh@example.com",
        department: 1,
        role: 1,
    },
    SeedEmployee {
        name: "Ankit Verma",
        email: "ankit.verma@example.com",
        department: 0,
        role: 2,
    },
];
