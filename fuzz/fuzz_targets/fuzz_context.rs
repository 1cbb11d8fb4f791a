// SPDX-FileCopyrightText: 2026 redflag contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = redflag::services::context::scan(text);
    }
});
