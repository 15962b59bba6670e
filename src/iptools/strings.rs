// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static SLASH: &str = "/";
pub(crate) static PERCENT: &str = "%";
pub(crate) static DOUBLE_COLON: &str = "::";
pub(crate) static IP_DELIMS: &[char] = &['.', ':'];

// device wildcard tokens and the addresses they stand for
pub(crate) const ANY: &str = "any";
pub(crate) const ANY6: &str = "any6";
pub(crate) const V4_WILDCARD: &str = "0.0.0.0";
pub(crate) const V6_WILDCARD: &str = "::";

/// Rendering of a component that could not be read as a number.
pub(crate) static NAN: &str = "NaN";

// mod.rs
pub(crate) static ERR_INVALID_IP: &str = "not an IP address";
pub(crate) static ERR_INVALID_ARG: &str = "invalid IP address given as";
pub(crate) static ERR_MISMATCH: &str = "IP family mismatch in range check";

// regex statics
pub(crate) static PANIC_GRAMMAR: &str = "address grammar must compile";
