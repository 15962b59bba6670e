// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IP address normalization following the managed device's own conventions.

Addresses may carry a `%route-domain` and a `/prefix-length` suffix, and the
device spells the zero-length wildcard networks as `any` (IPv4) and `any6`
(IPv6). Everything in here is a pure function of its inputs.
*/

mod minimize;
mod netmask;
mod parse;
mod range;
mod strings;
mod structs;
mod validate;

use std::{error, fmt};
use strings::*;

pub use minimize::minimize_ip;
pub use netmask::*;
pub use parse::{parse_ip_address, split_address};
pub use range::*;
pub use structs::{IpFam, ParsedAddress, RangeArg};
pub use validate::*;

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
pub(crate) const V6_GROUPS: usize = 8;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// not an IP address at all
    Invalid(String),
    /// one of the range check arguments is neither IPv4 nor IPv6
    InvalidAddress { arg: RangeArg, addr: String },
    /// range check arguments are not all of the same IP family
    FamilyMismatch { ip: String, low: String, high: String },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Invalid(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            AddressError::InvalidAddress { arg, addr } => {
                write!(f, "{ERR_INVALID_ARG} {arg}: '{addr}'")
            }
            AddressError::FamilyMismatch { ip, low, high } => {
                write!(f, "{ERR_MISMATCH}: '{ip}' vs '{low}' - '{high}'")
            }
        }
    }
}

impl error::Error for AddressError {}
