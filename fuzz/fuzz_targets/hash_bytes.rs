#![no_main]

use libfuzzer_sys::fuzz_target;
use meowrs::{Hasher, checksum, checksum32, checksum64};

fuzz_target!(|input: (u64, Vec<u8>)| {
    let (seed, data) = input;

    let oneshot = checksum(seed, &data);

    // Verify: chunk-invariance across a range of write sizes, including
    // sizes that straddle the 256-byte block and the 16-byte trailing window
    for chunk_size in [1, 7, 15, 16, 17, 255, 256, 257, 1024] {
        let mut hasher = Hasher::new(seed);
        for chunk in data.chunks(chunk_size) {
            hasher.write(chunk);
        }
        assert_eq!(hasher.checksum(), oneshot);

        // Verify: finalize is idempotent and read-only
        assert_eq!(hasher.checksum(), oneshot);
    }

    // Verify: narrow widths are little-endian prefixes of the full digest
    assert_eq!(checksum64(seed, &data), oneshot.to_u64());
    assert_eq!(checksum32(seed, &data), oneshot.to_u32());

    // Verify: hex round-trips
    let hex = oneshot.to_hex();
    assert_eq!(meowrs::Checksum::from_hex(&hex), Some(oneshot));
});
