// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, IPV4_BITS, IPV6_BITS};
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::{fmt, net::IpAddr};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Address width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }

    /// The device's wildcard token for this family (`any` or `any6`).
    pub fn wildcard(&self) -> &'static str {
        match self {
            IpFam::V4 => ANY,
            IpFam::V6 => ANY6,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "IPv4"),
            IpFam::V6 => write!(f, "IPv6"),
        }
    }
}

/* ---------------------------------- */

/// Names an argument of [is_ip_in_range](super::is_ip_in_range) in errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeArg {
    Ip,
    LowEnd,
    HighEnd,
}

impl fmt::Display for RangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeArg::Ip => write!(f, "address"),
            RangeArg::LowEnd => write!(f, "range low end"),
            RangeArg::HighEnd => write!(f, "range high end"),
        }
    }
}

/* -------------------------------------------------------------------------- */

/**
An address split into the pieces the device configuration works with.

All fields are strings in the device's own spelling:
- `ip`: canonical address body, empty if there was no input
- `route_domain`: `""` or `%N` (never `%0`)
- `cidr`: `""` or the decimal prefix length; wildcard addresses report `"0"`
- `netmask`: full netmask, or `any`/`any6` when `cidr` is `"0"`
- `ip_with_route`: `ip` followed by `route_domain`
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    pub ip: String,
    pub route_domain: String,
    pub cidr: String,
    pub netmask: String,
    pub ip_with_route: String,
}

impl ParsedAddress {
    /// Family of the address body, None for an empty record.
    pub fn family(&self) -> Option<IpFam> {
        if self.ip.is_empty() {
            None
        } else if self.ip.contains(':') {
            Some(IpFam::V6)
        } else {
            Some(IpFam::V4)
        }
    }

    /// True if this is the wildcard network of its family.
    pub fn is_wildcard(&self) -> bool {
        self.netmask == ANY || self.netmask == ANY6
    }

    /**
    The network described by this record: the address truncated to `cidr`,
    or a host network when no prefix length was given.

    Returns None for empty records and bodies which are not addresses.
    */
    pub fn to_ipnet(&self) -> Option<IpNet> {
        let addr: IpAddr = self.ip.parse().ok()?;
        let prefix: u8 = match self.cidr.as_str() {
            "" => match addr {
                IpAddr::V4(_) => IPV4_BITS,
                IpAddr::V6(_) => IPV6_BITS,
            },
            cidr => cidr.parse().ok()?,
        };
        IpNet::new(addr, prefix).ok().map(|net| net.trunc())
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cidr.is_empty() {
            true => write!(f, "{}", self.ip_with_route),
            false => write!(f, "{}{SLASH}{}", self.ip_with_route, self.cidr),
        }
    }
}

/* -------------------------------------------------------------------------- */
