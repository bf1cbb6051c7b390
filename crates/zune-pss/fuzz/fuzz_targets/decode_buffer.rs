#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_pss::zune_core::bytestream::ZCursor;
    let data = ZCursor::new(data);

    let mut decoder = zune_pss::PssDecoder::new(data);

    if let Ok(image) = decoder.decode() {
        let mut sink = Vec::new();
        let _ = image.write_ppm(&mut sink, zune_pss::PpmFormat::P3);
    }
});
