/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod department;
pub mod employee;
pub mod employee_department;
pub mod employee_role;
pub mod role;
