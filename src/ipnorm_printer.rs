// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use ipnorm::{
    ip_family, ip_to_number_string, is_ip_in_range, parse_ip_address, split_address,
    ParsedAddress,
};
use std::{env, process::ExitCode};

static USAGE: &str = "usage: ipnorm-printer ADDRESS[:PORT]... | --range IP LOW HIGH";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    if args[0] == "--range" {
        let [ip, low, high] = &args[1..] else {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        };
        return match is_ip_in_range(ip, low, high) {
            Ok(inside) => {
                println!("{ip} in {low} - {high}: {inside}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    for arg in &args {
        let (addr, port) = split_address(arg);
        let parsed: ParsedAddress = parse_ip_address(Some(&addr));
        println!("{arg}:");
        println!("  port:   {}", port.as_deref().unwrap_or("-"));
        println!("  parsed: {parsed:?}");
        if let Some(fam) = ip_family(&addr) {
            let num: String = ip_to_number_string(&addr).unwrap_or_else(|e| e.to_string());
            println!("  {fam}:   {num}");
        }
        if let Some(net) = parsed.to_ipnet() {
            println!("  net:    {net}");
        }
    }
    ExitCode::SUCCESS
}
