#![no_main]

use libfuzzer_sys::fuzz_target;
use meowrs::{Hasher, checksum};
use std::io::Write;

fuzz_target!(|input: (u64, Vec<u8>, Vec<u8>)| {
    let (seed, first, second) = input;

    // Verify: the io::Write path matches the direct path
    let mut via_io = Hasher::new(seed);
    via_io.write_all(&first).unwrap();
    via_io.write_all(&second).unwrap();

    let mut combined = first.clone();
    combined.extend_from_slice(&second);
    assert_eq!(via_io.checksum(), checksum(seed, &combined));

    // Verify: reset equivalence - a reused hasher matches a fresh one
    let mut reused = Hasher::new(seed);
    reused.write(&first);
    let _ = reused.checksum();
    reused.reset();
    reused.write(&second);
    assert_eq!(reused.checksum(), checksum(seed, &second));

    // Verify: an intermediate digest does not disturb the stream
    let mut interrupted = Hasher::new(seed);
    interrupted.write(&first);
    let _ = interrupted.sum(Vec::new());
    interrupted.write(&second);
    assert_eq!(interrupted.checksum(), checksum(seed, &combined));
});
