// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    minimize::minimize_ip, netmask::calc_netmask, strings::*, validate::is_ip, ParsedAddress,
};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::trace;

lazy_static! {
    static ref ADDRESS_PARTS: Regex =
        Regex::new(r"([a-zA-Z0-9.:]+)(?:%([0-9]+))?(?:/([0-9]+))?").expect(PANIC_GRAMMAR);
    static ref PORT_SUFFIX: Regex = Regex::new(r"[.:]([0-9]+)$").expect(PANIC_GRAMMAR);
}

/**
Split an `address:port` (IPv4) or `address.port` (IPv6) pair.

A string that does not contain both a `.` and a `:` has no port, and
neither does a string which already is a valid address, so bare addresses
(including `::ffff:192.0.2.1`) come through untouched. The wildcard
tokens may carry a port with either separator (`any:80`, `any6.443`).

### Returns
- `(address, Some(port))`, or `(input, None)` if there is no port.
*/
pub fn split_address(combined: impl AsRef<str>) -> (String, Option<String>) {
    let combined: &str = combined.as_ref();

    // "any6" first, "any" is a prefix of it
    for token in [ANY6, ANY] {
        if let Some(rest) = combined.strip_prefix(token) {
            if rest.is_empty() {
                return (token.to_string(), None);
            }
            if let Some(port) = rest.strip_prefix(IP_DELIMS) {
                if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) {
                    return (token.to_string(), Some(port.to_string()));
                }
            }
        }
    }

    if !(combined.contains('.') && combined.contains(':')) || is_ip(combined) {
        return (combined.to_string(), None);
    }

    match PORT_SUFFIX.captures(combined) {
        Some(caps) => {
            let (Some(whole), Some(port)) = (caps.get(0), caps.get(1)) else {
                return (combined.to_string(), None);
            };
            (combined[..whole.start()].to_string(), Some(port.as_str().to_string()))
        }
        None => (combined.to_string(), None),
    }
}

/**
Parse a device address (`ip[%rd][/prefix]`, or a wildcard token) into a
[ParsedAddress].

- `any` and `any6` become `0.0.0.0` / `::`, and any spelling of those two
  addresses is reported as the wildcard network (cidr `"0"`, netmask
  `any`/`any6`), whatever prefix length it came with.
- Route domain 0 is the default route domain and is dropped.
- No input at all gives empty fields and the IPv4 host netmask.

The body is minimized but not validated; see [minimize_ip].
*/
pub fn parse_ip_address(address: Option<&str>) -> ParsedAddress {
    let address: &str = match address.unwrap_or_default() {
        ANY => V4_WILDCARD,
        ANY6 => V6_WILDCARD,
        other => other,
    };

    let minimized: String = minimize_ip(address);
    let caps: Option<Captures> = ADDRESS_PARTS.captures(&minimized);
    let part = |idx: usize| capture_or_empty(&caps, idx);

    let ip: String = part(1).to_string();
    let route_domain: String = match part(2) {
        "" | "0" => String::new(),
        rd => format!("{PERCENT}{rd}"),
    };
    let cidr: String = match ip.as_str() {
        V4_WILDCARD | V6_WILDCARD => "0".to_string(),
        _ => part(3).to_string(),
    };
    let netmask: String = calc_netmask(&cidr, &ip);
    let ip_with_route: String = format!("{ip}{route_domain}");

    let parsed = ParsedAddress {
        ip,
        route_domain,
        cidr,
        netmask,
        ip_with_route,
    };
    trace!(input = address, ?parsed, "parsed address");
    parsed
}

#[inline]
fn capture_or_empty<'h>(caps: &Option<Captures<'h>>, idx: usize) -> &'h str {
    caps.as_ref()
        .and_then(|c| c.get(idx))
        .map_or("", |m| m.as_str())
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: Option<&str>, ip: &str, rd: &str, cidr: &str, netmask: &str) {
        let expected = ParsedAddress {
            ip: ip.to_string(),
            route_domain: rd.to_string(),
            cidr: cidr.to_string(),
            netmask: netmask.to_string(),
            ip_with_route: format!("{ip}{rd}"),
        };
        assert_eq!(parse_ip_address(input), expected, "Failed: {input:?}");
    }

    #[test]
    fn test_parse_empty() {
        check(None, "", "", "", "255.255.255.255");
        check(Some(""), "", "", "", "255.255.255.255");
    }

    #[test]
    fn test_parse_wildcards() {
        check(Some("0.0.0.0"), "0.0.0.0", "", "0", "any");
        check(Some("any"), "0.0.0.0", "", "0", "any");
        check(Some("::"), "::", "", "0", "any6");
        check(Some("any6"), "::", "", "0", "any6");
        check(Some("0.0.0.0/0"), "0.0.0.0", "", "0", "any");
        check(Some("0:0:0:0:0:0:0:0/0"), "::", "", "0", "any6");
        check(Some("0.0.0.0/24"), "0.0.0.0", "", "0", "any");
        check(Some("0.0.0.0%3"), "0.0.0.0", "%3", "0", "any");
    }

    #[test]
    fn test_parse_v4() {
        check(Some("123.123.123.123%123"), "123.123.123.123", "%123", "", "255.255.255.255");
        check(Some("123.123.123.123%2222/24"), "123.123.123.123", "%2222", "24", "255.255.255.0");
        check(Some("1.1.1.1%0"), "1.1.1.1", "", "", "255.255.255.255");
        check(Some("010.0.0.1/8"), "8.0.0.1", "", "8", "255.0.0.0");
    }

    #[test]
    fn test_parse_v6() {
        check(
            Some("1:1:1:1:1:1"),
            "1:1:1:1:1:1::", "", "",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        );
        check(
            Some("2001:0db8:85a3:0000:0000:8a2e:0370:7335/64"),
            "2001:db8:85a3::8a2e:370:7335", "", "64",
            "ffff:ffff:ffff:ffff::",
        );
        check(
            Some("2001:0db8:85a3:0000:0000:8a2e:0370:7335%55/64"),
            "2001:db8:85a3::8a2e:370:7335", "%55", "64",
            "ffff:ffff:ffff:ffff::",
        );
        check(Some("fe80::1%00"), "fe80::1", "", "", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    }

    #[rustfmt::skip]
    const SPLIT: &[(&str, &str, Option<&str>)] = &[
        ("127.0.0.1:80",                            "127.0.0.1",                            Some("80")),
        ("::1.80",                                  "::1",                                  Some("80")),
        ("2001:0db8:85a3:0000::8a2e:0370:7334.80",  "2001:0db8:85a3:0000::8a2e:0370:7334",  Some("80")),
        ("127.0.0.1%2:8080",                        "127.0.0.1%2",                          Some("8080")),
        ("::ffff:192.0.2.1.443",                    "::ffff:192.0.2.1",                     Some("443")),
        ("127.0.0.1",                               "127.0.0.1",                            None),
        ("::1",                                     "::1",                                  None),
        ("::ffff:192.0.2.1",                        "::ffff:192.0.2.1",                     None),
        ("::1.2.3.4",                               "::1.2.3.4",                            None),
        ("::ffff:192.0.2.1%2/96",                   "::ffff:192.0.2.1%2/96",                None),
        ("10.0.0.1:http",                           "10.0.0.1:http",                        None),
        ("",                                        "",                                     None),
        ("any",                                     "any",                                  None),
        ("any6",                                    "any6",                                 None),
        ("any:80",                                  "any",                                  Some("80")),
        ("any.80",                                  "any",                                  Some("80")),
        ("any6.443",                                "any6",                                 Some("443")),
        ("any6:443",                                "any6",                                 Some("443")),
    ];

    #[test]
    fn test_split_address() {
        for (input, addr, port) in SPLIT {
            let expected = (addr.to_string(), port.map(str::to_string));
            assert_eq!(split_address(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_split_then_parse() {
        let (addr, port) = split_address("any6.443");
        let parsed: ParsedAddress = parse_ip_address(Some(&addr));
        assert_eq!(port.as_deref(), Some("443"));
        assert_eq!(parsed.netmask, "any6");
        assert_eq!(parsed.ip, "::");
    }
}
