// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Normalization and range arithmetic for device-style IPv4/IPv6 addresses.

```
use ipnorm::{minimize_ip, parse_ip_address, is_ip_in_range};

assert_eq!(minimize_ip("2001:0db8:0000:0000:0000:0000:0000:0001"), "2001:db8::1");
assert_eq!(parse_ip_address(Some("10.0.0.1%2/24")).netmask, "255.255.255.0");
assert_eq!(is_ip_in_range("10.0.0.5", "10.0.0.1", "10.0.0.9"), Ok(true));
```
*/

mod iptools;

pub use iptools::*;
