/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;
use email_address::EmailAddress;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

impl From<InputError> for DbErr {
    fn from(err: InputError) -> Self {
        DbErr::Custom(err.to_string())
    }
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn validate_name(field: &'static str, s: &str) -> Result<(), InputError> {
    if s.trim().is_empty() {
        return Err(InputError::EmptyField(field));
    }

    Ok(())
}

pub fn validate_email(s: &str) -> Result<(), InputError> {
    if s.trim().is_empty() {
        return Err(InputError::EmptyField("email"));
    }

    if !EmailAddress::is_valid(s) {
        return Err(InputError::InvalidEmail(s.to_string()));
    }

    Ok(())
}

/// Whether every connection to this url opens its own private database.
pub fn is_in_memory_database(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}
