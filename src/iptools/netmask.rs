// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    minimize::{minimize_ip, parse_int, render},
    strings::*,
    IPV4_BITS, IPV6_BITS, V6_GROUPS,
};
use std::num::IntErrorKind;

/**
Netmask for a prefix length, in the family of `ip` (IPv6 if it contains a
`:`, IPv4 otherwise).

A prefix length of `"0"` gives the device wildcard token (`any`/`any6`), an
empty one the host mask of the family.
*/
pub fn calc_netmask(prefix: impl AsRef<str>, ip: impl AsRef<str>) -> String {
    let prefix: &str = prefix.as_ref();
    let is_v6: bool = ip.as_ref().contains(':');

    if prefix == "0" {
        return match is_v6 {
            true => ANY6.to_string(),
            false => ANY.to_string(),
        };
    }
    match is_v6 {
        true => calc_ipv6_netmask(prefix),
        false => calc_ipv4_netmask(prefix),
    }
}

/// Dotted-decimal IPv4 netmask. The prefix length is clamped to `0..=32`.
pub fn calc_ipv4_netmask(prefix: impl AsRef<str>) -> String {
    let len: Option<u32> = mask_length(prefix.as_ref(), IPV4_BITS);
    mask_fields(len, 4, 8)
        .into_iter()
        .map(|field| render(field, 10))
        .collect::<Vec<String>>()
        .join(".")
}

/// Minimized IPv6 netmask. The prefix length is clamped to `0..=128`.
pub fn calc_ipv6_netmask(prefix: impl AsRef<str>) -> String {
    let len: Option<u32> = mask_length(prefix.as_ref(), IPV6_BITS);
    let full: String = mask_fields(len, V6_GROUPS, 16)
        .into_iter()
        .map(|field| render(field, 16))
        .collect::<Vec<String>>()
        .join(":");
    minimize_ip(full)
}

/// Empty means a host mask. None if the prefix length is not a number;
/// numbers too large for an i64 still clamp to the family range.
fn mask_length(prefix: &str, bits: u8) -> Option<u32> {
    if prefix.is_empty() {
        return Some(bits as u32);
    }
    let len: i64 = match prefix.trim().parse::<i64>() {
        Ok(len) => len,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return None,
        },
    };
    Some(len.clamp(0, bits as i64) as u32)
}

/**
Split `len` leading one-bits over `count` fields of `width` bits each:
every field is `2^width - 2^(width - n)`, where `n` is the number of
prefix bits that fall into it.
*/
fn mask_fields(len: Option<u32>, count: usize, width: u32) -> Vec<Option<i64>> {
    let mut remaining: Option<u32> = len;
    (0..count)
        .map(|_| {
            let left: u32 = remaining?;
            let n: u32 = left.min(width);
            remaining = Some(left - n);
            Some((1i64 << width) - (1i64 << (width - n)))
        })
        .collect()
}

/* ---------------------------------- */

/**
Prefix length of a netmask: the number of one-bits in it.

IPv6 masks are taken apart into bytes first (high and low byte of every
group, empty groups counting as zero). The wildcard tokens `any`/`any6` are
prefix length 0.
*/
pub fn netmask_to_prefix(netmask: impl AsRef<str>) -> u32 {
    let netmask: &str = netmask.as_ref();
    if netmask == ANY || netmask == ANY6 {
        return 0;
    }

    if netmask.contains(':') {
        return netmask
            .split(':')
            .map(|group| parse_int(group, 16).unwrap_or(0) as i32)
            .map(|val| ((val >> 8) as u32).count_ones() + ((val & 0xff) as u32).count_ones())
            .sum();
    }

    netmask
        .split(|c: char| !c.is_ascii_digit())
        .filter(|digits| !digits.is_empty())
        .map(|digits| digits.parse::<u64>().map_or(0, |val| val as u32))
        .map(u32::count_ones)
        .sum()
}

/// Prefix length of a netmask as `"/N"`, or as `"N"` if `no_slash` is set.
pub fn get_cidr_from_netmask(netmask: impl AsRef<str>, no_slash: bool) -> String {
    let prefix: u32 = netmask_to_prefix(netmask);
    match no_slash {
        true => prefix.to_string(),
        false => format!("{SLASH}{prefix}"),
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::{Ipv4Net, Ipv6Net};
    use std::net::{Ipv4Addr, Ipv6Addr};

    const TEST_V4: &str = "1.1.1.1";
    const TEST_V6: &str = "::1";

    #[rustfmt::skip]
    const CALC: &[(&str, &str, &str)] = &[
        ("",    "",         "255.255.255.255"),
        ("",    TEST_V4,    "255.255.255.255"),
        ("24",  TEST_V4,    "255.255.255.0"),
        ("13",  TEST_V4,    "255.248.0.0"),
        ("0",   "::",       "any6"),
        ("0",   "0.0.0.0",  "any"),
        ("32",  TEST_V4,    "255.255.255.255"),
        ("40",  TEST_V4,    "255.255.255.255"),
        ("-3",  TEST_V4,    "0.0.0.0"),
        ("",    TEST_V6,    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        ("24",  TEST_V6,    "ffff:ff00::"),
        ("64",  TEST_V6,    "ffff:ffff:ffff:ffff::"),
        ("120", TEST_V6,    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ff00"),
        ("128", TEST_V6,    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        ("200", TEST_V6,    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
    ];

    #[rustfmt::skip]
    const TO_CIDR: &[&str] = &[
        "any",                                      "/0",
        "any6",                                     "/0",
        "254.0.0.0",                                "/7",
        "255.224.0.0",                              "/11",
        "255.255.255.0",                            "/24",
        "255.255.255.248",                          "/29",
        "255.255.255.255",                          "/32",
        "8000::",                                   "/1",
        "c000::",                                   "/2",
        "ff00::",                                   "/8",
        "fff0::",                                   "/12",
        "fff8:0000::",                              "/13",
        "ffff:0000::",                              "/16",
        "ffff:d000::",                              "/19",
        "ffff:ffff:ffff:ffff::",                    "/64",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fff8",  "/125",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffc",  "/126",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe",  "/127",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",  "/128",
    ];

    #[test]
    fn test_calc_netmask() {
        for (prefix, ip, expected) in CALC {
            assert_eq!(calc_netmask(prefix, ip), *expected, "Failed: '{prefix}' for '{ip}'");
        }
    }

    #[test]
    fn test_calc_netmask_garbage() {
        assert_eq!(calc_ipv4_netmask("abc"), "NaN.NaN.NaN.NaN");
        assert_eq!(calc_ipv6_netmask("x"), "NaN:NaN:NaN:NaN:NaN:NaN:NaN:NaN");
    }

    #[test]
    fn test_calc_netmask_huge_prefix() {
        assert_eq!(calc_ipv4_netmask("99999999999999999999"), "255.255.255.255");
        assert_eq!(calc_ipv4_netmask("-99999999999999999999"), "0.0.0.0");
        assert_eq!(
            calc_ipv6_netmask("99999999999999999999"),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
        assert_eq!(calc_ipv6_netmask("-99999999999999999999"), "::");
    }

    #[test]
    fn test_get_cidr_from_netmask() {
        for i in (0..TO_CIDR.len()).step_by(2) {
            let mask: &str = TO_CIDR[i];
            let expected: &str = TO_CIDR[i + 1];
            assert_eq!(get_cidr_from_netmask(mask, false), expected, "Failed: '{mask}'");
            assert_eq!(get_cidr_from_netmask(mask, true), expected[1..], "Failed: '{mask}'");
        }
    }

    #[test]
    fn test_inverse_v4() {
        for prefix in 0..=IPV4_BITS as u32 {
            let mask: String = calc_netmask(prefix.to_string(), TEST_V4);
            assert_eq!(netmask_to_prefix(&mask), prefix, "Failed: /{prefix} -> '{mask}'");
        }
    }

    #[test]
    fn test_inverse_v6() {
        for prefix in 0..=IPV6_BITS as u32 {
            let mask: String = calc_netmask(prefix.to_string(), TEST_V6);
            assert_eq!(netmask_to_prefix(&mask), prefix, "Failed: /{prefix} -> '{mask}'");
        }
    }

    #[test]
    fn test_matches_ipnet() {
        for prefix in 1..=IPV4_BITS {
            let net = Ipv4Net::new(Ipv4Addr::UNSPECIFIED, prefix).unwrap();
            assert_eq!(calc_ipv4_netmask(prefix.to_string()), net.netmask().to_string());
        }
        for prefix in 1..=IPV6_BITS {
            let net = Ipv6Net::new(Ipv6Addr::UNSPECIFIED, prefix).unwrap();
            assert_eq!(calc_ipv6_netmask(prefix.to_string()), net.netmask().to_string());
        }
    }
}
