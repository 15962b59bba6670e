// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, IpFam};
use lazy_static::lazy_static;
use regex::Regex;

static V4_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";
static H16: &str = r"[0-9a-f]{1,4}";
static ROUTE_DOMAIN: &str =
    r"(?:%(?:6553[0-5]|655[0-2][0-9]|65[0-4][0-9]{2}|6[0-4][0-9]{3}|[1-5][0-9]{4}|[1-9][0-9]{0,3}|0))?";
static V4_PREFIX: &str = r"(?:/(?:3[012]|[12]?[0-9]))?";
static V6_PREFIX: &str = r"(?:/(?:12[0-8]|1[01][0-9]|[1-9]?[0-9]))?";

/*
Every place a `::` may appear in an IPv6 address. `H` stands for a hex group
and `L` for the last 32 bits (one or two groups, or a dotted IPv4 tail).
*/
#[rustfmt::skip]
static V6_FORMS: &[&str] = &[
    "::(?:(?:H:){0,5}L)?",
    "H::(?:(?:H:){0,4}L)?",
    "H:H::(?:(?:H:){0,3}L)?",
    "H(?::H){2}::(?:(?:H:){0,2}L)?",
    "H(?::H){3}::(?:(?:H:)?L)?",
    "H(?::H){4}::L?",
    "H(?::H){5}::H?",
    "H(?::H){0,6}::",
    "(?:H:){7}H",
];

lazy_static! {
    static ref IPV4_RE: Regex = Regex::new(&format!(
        "^{}{ROUTE_DOMAIN}{V4_PREFIX}$",
        ipv4_grammar()
    ))
    .expect(PANIC_GRAMMAR);
    static ref IPV6_RE: Regex = Regex::new(&format!(
        "^{}{ROUTE_DOMAIN}{V6_PREFIX}$",
        ipv6_grammar()
    ))
    .expect(PANIC_GRAMMAR);
}

fn ipv4_grammar() -> String {
    format!(r"(?:{V4_OCTET}\.){{3}}{V4_OCTET}")
}

fn ipv6_grammar() -> String {
    let ls32: String = format!("(?:(?:{H16}:)?{H16}|{})", ipv4_grammar());
    let forms: Vec<String> = V6_FORMS
        .iter()
        .map(|form| form.replace('L', &ls32).replace('H', H16))
        .collect();
    format!("(?:{})", forms.join("|"))
}

/// Characters which may appear in any address accepted by the validators.
#[inline]
fn is_address_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | ':' | '.' | '%' | '/')
}

fn is_ip_common(address: &str, grammar: &Regex) -> bool {
    if address.is_empty() {
        return false;
    }
    let lower: String = address.to_lowercase();
    if !lower.chars().all(is_address_char) {
        return false;
    }
    grammar.is_match(&lower)
}

/**
Checks whether a string is an IPv4 address in device notation: four decimal
octets, optional `%route-domain` (0-65535) and optional `/prefix` (0-32).

Never fails; anything else (including the empty string) is simply `false`.
*/
pub fn is_ipv4(address: impl AsRef<str>) -> bool {
    is_ip_common(address.as_ref(), &IPV4_RE)
}

/**
Checks whether a string is an IPv6 address in device notation: full,
`::`-compressed or with a dotted IPv4 tail, optional `%route-domain`
(0-65535) and optional `/prefix` (0-128). Case-insensitive.
*/
pub fn is_ipv6(address: impl AsRef<str>) -> bool {
    is_ip_common(address.as_ref(), &IPV6_RE)
}

/// Either [is_ipv4] or [is_ipv6].
pub fn is_ip(address: impl AsRef<str>) -> bool {
    ip_family(address).is_some()
}

/// Family of a valid address, None if the string is neither.
pub fn ip_family(address: impl AsRef<str>) -> Option<IpFam> {
    let address: &str = address.as_ref();
    if is_ipv4(address) {
        Some(IpFam::V4)
    } else if is_ipv6(address) {
        Some(IpFam::V6)
    } else {
        None
    }
}

/* -------------------------------------------------------------------------- */
