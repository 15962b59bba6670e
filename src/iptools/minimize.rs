// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, V6_GROUPS};
use std::iter;
use tracing::debug;

/**
Minimize the textual form of a device IPv4/IPv6 address, the same way the
device itself renders addresses. Optional `%route-domain` and `/prefix`
suffixes are kept (decimal-normalized).

- IPv4 octets with a leading zero are octal (`0127` becomes `87`), others
  decimal with redundant zeros dropped.
- IPv6 groups lose their leading zeros, a dotted IPv4 tail becomes two hex
  groups, and the longest run of two or more zero groups (leftmost on ties)
  is compressed to `::`.

The empty string, `::` and anything containing `any` are returned as-is.

This does NOT validate. Components which are not numbers come out as `NaN`,
so check the input with [is_ipv4](super::is_ipv4)/[is_ipv6](super::is_ipv6)
first if it matters.
*/
pub fn minimize_ip(ip: impl AsRef<str>) -> String {
    let ip: &str = ip.as_ref();
    if ip.is_empty() || ip == V6_WILDCARD || ip.contains(ANY) {
        return ip.to_string();
    }

    // anything past a second '/' or '%' is dropped
    let mut parts = ip.split(SLASH);
    let addr: &str = parts.next().unwrap_or_default();
    let prefix: Option<&str> = parts.next();
    let mut parts = addr.split(PERCENT);
    let body: &str = parts.next().unwrap_or_default();
    let route_domain: Option<&str> = parts.next();

    let mut out: String = match body.contains(':') {
        true => minimize_v6(body),
        false => minimize_v4(body),
    };

    if let Some(rd) = route_domain.filter(|s| !s.is_empty()) {
        out.push_str(PERCENT);
        out.push_str(&render(parse_int(rd, 10), 10));
    }
    if let Some(prefix) = prefix.filter(|s| !s.is_empty()) {
        out.push_str(SLASH);
        out.push_str(&render(parse_int(prefix, 10), 10));
    }

    if out.contains(NAN) {
        debug!(input = ip, output = out.as_str(), "address has non-numeric components");
    }
    out
}

fn minimize_v4(body: &str) -> String {
    body.split('.')
        .map(|octet| match octet.starts_with('0') {
            true => parse_int(octet, 8),
            false => parse_int(octet, 10),
        })
        .map(|val| render(val, 10))
        .collect::<Vec<String>>()
        .join(".")
}

fn minimize_v6(body: &str) -> String {
    let groups: Vec<Option<i64>> = expand_v6(body);
    let mut hex: Vec<String> = groups.iter().map(|&g| render(g, 16)).collect();

    let run: ZeroRun = longest_zero_run(&groups);
    if run.len >= V6_GROUPS {
        return V6_WILDCARD.to_string();
    }
    if run.len > 1 {
        /*
        Joining with ':' turns the empty marker into '::', except at either
        end of the address where one more ':' is needed.
        */
        let marker: &str = match run.start == 0 || run.start + run.len >= V6_GROUPS {
            true => ":",
            false => "",
        };
        hex.splice(run.start..run.start + run.len, iter::once(marker.to_string()));
    }
    hex.join(":")
}

/// Turn an IPv6 body into (at least) eight numeric groups.
fn expand_v6(body: &str) -> Vec<Option<i64>> {
    let text: String = fold_v4_tail(body);

    let mut halves = text.split(DOUBLE_COLON);
    let left: Vec<&str> = halves.next().unwrap_or_default().split(':').collect();
    let right: Vec<&str> = halves
        .next()
        .map(|r| r.split(':').collect())
        .unwrap_or_default();
    let fill: usize = V6_GROUPS.saturating_sub(left.len() + right.len());

    left.into_iter()
        .chain(iter::repeat("0").take(fill))
        .chain(right)
        .map(|group| match group.is_empty() {
            true => Some(0),
            false => parse_int(group, 16),
        })
        .collect()
}

/// Replace a dotted IPv4 tail (`::ffff:192.0.2.1`) with two hex groups.
fn fold_v4_tail(body: &str) -> String {
    let mut dotted = body.split('.');
    let head: &str = dotted.next().unwrap_or_default();
    let tail: Vec<&str> = dotted.collect();
    if tail.is_empty() {
        return body.to_string();
    }

    let mut groups: Vec<&str> = head.split(':').collect();
    let first: &str = groups.pop().unwrap_or_default();
    let octets: Vec<Option<i64>> = iter::once(first)
        .chain(tail)
        .map(|octet| parse_int(octet, 10))
        .collect();
    let pair = |hi: usize, lo: usize| -> Option<i64> {
        let hi: i64 = octets.get(hi).copied().flatten()?;
        let lo: i64 = octets.get(lo).copied().flatten()?;
        Some((hi << 8) + lo)
    };

    let folded: [String; 2] = [render(pair(0, 1), 16), render(pair(2, 3), 16)];
    let mut out: Vec<&str> = groups;
    out.extend(folded.iter().map(String::as_str));
    out.join(":")
}

/* ---------------------------------- */

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct ZeroRun {
    start: usize,
    len: usize,
}

/// Longest run of zero groups. Only a strictly longer run replaces the
/// current best, so the leftmost one wins ties.
fn longest_zero_run(groups: &[Option<i64>]) -> ZeroRun {
    let (current, best) = groups.iter().enumerate().fold(
        (ZeroRun::default(), ZeroRun::default()),
        |(current, best), (idx, group)| match group {
            Some(0) if current.len == 0 => (ZeroRun { start: idx, len: 1 }, best),
            Some(0) => (ZeroRun { len: current.len + 1, ..current }, best),
            _ if current.len > best.len => (ZeroRun::default(), current),
            _ => (ZeroRun::default(), best),
        },
    );
    match current.len > best.len {
        true => current,
        false => best,
    }
}

/* ---------------------------------- */

/**
Lenient integer parse: optional sign, then as many `radix` digits as there
are. Trailing garbage is ignored, so `"12ab"` in base 10 is `12`.

Returns None if not a single digit could be read (or on overflow).
*/
pub(crate) fn parse_int(s: &str, radix: u32) -> Option<i64> {
    let s: &str = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut val: i64 = 0;
    let mut seen: bool = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        val = val.checked_mul(radix as i64)?.checked_add(digit as i64)?;
        seen = true;
    }

    seen.then_some(if negative { -val } else { val })
}

/// Render a parsed value in base 10 or 16 (lower-case), or [NAN].
pub(crate) fn render(val: Option<i64>, radix: u32) -> String {
    match (val, radix) {
        (None, _) => NAN.to_string(),
        (Some(v), 16) if v < 0 => format!("-{:x}", v.unsigned_abs()),
        (Some(v), 16) => format!("{v:x}"),
        (Some(v), _) => v.to_string(),
    }
}

/* -------------------------------------------------------------------------- */
