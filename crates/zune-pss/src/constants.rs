/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Signature every Paintstorm document starts with
pub const PSS_SIGNATURE: [u8; 4] = [0x6A, 0x87, 0x01, 0x00];

/// Size of the fixed document header in bytes
pub const PSS_HEADER_SIZE: usize = 40;

/// Byte offset of the big endian width field
pub const WIDTH_OFFSET: usize = 8;

/// Byte offset of the big endian height field
pub const HEIGHT_OFFSET: usize = 12;

/// Largest width or height we are willing to decode.
///
/// Anything larger is treated as a corrupt or hostile file and
/// rejected before we allocate.
pub const MAX_DIMENSION: usize = 10000;

/// Paintstorm composites are always 8 bit RGB
pub const CHANNEL_COUNT: usize = 3;

/// Starting capacity of a channel buffer, enough for a 16x16 image
pub const INITIAL_CHANNEL_CAPACITY: usize = 256;

/// Bytes pulled from the input per read while collecting the compressed payload
pub const PAYLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Maximum sample value written to PPM headers
pub const MAX_SAMPLE_VALUE: u8 = 255;
