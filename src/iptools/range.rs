// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    minimize::minimize_ip, strings::*, validate::ip_family, AddressError, IpFam, RangeArg,
};
use std::net::IpAddr;
use tracing::debug;

/**
Numeric value of an address: 32 bits for IPv4, 128 bits for IPv6.

Any `%route-domain` and `/prefix` suffix is ignored, and the wildcard tokens
count as the all-zero address of their family.
*/
pub fn ip_to_number(ip: impl AsRef<str>) -> Result<u128, AddressError> {
    let raw: &str = ip.as_ref();
    let body: &str = strip_suffixes(raw);
    if body == ANY || body == ANY6 {
        return Ok(0);
    }

    let addr: IpAddr = minimize_ip(body)
        .parse()
        .map_err(|_| AddressError::Invalid(raw.to_string()))?;
    Ok(match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    })
}

/// [ip_to_number] rendered in decimal, f.ex. `"2130706433"` for `127.0.0.1`.
pub fn ip_to_number_string(ip: impl AsRef<str>) -> Result<String, AddressError> {
    ip_to_number(ip).map(|num| num.to_string())
}

/**
Whether `ip` lies in the inclusive range `low_end..=high_end`.

A `/prefix` on `ip` is ignored. All three must be valid addresses
([is_ipv4](super::is_ipv4) or [is_ipv6](super::is_ipv6)) of the same family.

### Errors
- [AddressError::InvalidAddress] naming the first argument which is not an
  address
- [AddressError::FamilyMismatch] if the families differ
*/
pub fn is_ip_in_range(
    ip: impl AsRef<str>,
    low_end: impl AsRef<str>,
    high_end: impl AsRef<str>,
) -> Result<bool, AddressError> {
    let (ip, low, high) = (ip.as_ref(), low_end.as_ref(), high_end.as_ref());

    let fam: IpFam = family_of(RangeArg::Ip, ip)?;
    let low_fam: IpFam = family_of(RangeArg::LowEnd, low)?;
    let high_fam: IpFam = family_of(RangeArg::HighEnd, high)?;
    if fam != low_fam || fam != high_fam {
        debug!(ip, low, high, "IP family mismatch in range check");
        return Err(AddressError::FamilyMismatch {
            ip: ip.to_string(),
            low: low.to_string(),
            high: high.to_string(),
        });
    }

    let num: u128 = ip_to_number(ip)?;
    let low_num: u128 = ip_to_number(low)?;
    let high_num: u128 = ip_to_number(high)?;

    let inside: bool = low_num <= num && num <= high_num;
    debug!(ip, low, high, inside, "range check");
    Ok(inside)
}

fn family_of(arg: RangeArg, addr: &str) -> Result<IpFam, AddressError> {
    ip_family(addr).ok_or_else(|| {
        debug!(%arg, addr, "not an IP address");
        AddressError::InvalidAddress {
            arg,
            addr: addr.to_string(),
        }
    })
}

/// Address body without `/prefix` and `%route-domain`.
#[inline]
fn strip_suffixes(ip: &str) -> &str {
    let ip: &str = ip.split(SLASH).next().unwrap_or_default();
    ip.split(PERCENT).next().unwrap_or_default()
}

/* -------------------------------------------------------------------------- */
