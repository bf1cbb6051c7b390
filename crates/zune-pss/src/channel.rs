/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Growable storage for a single decoded colour channel
use alloc::vec::Vec;

use crate::constants::INITIAL_CHANNEL_CAPACITY;
use crate::errors::PssDecodeErrors;

/// An append only buffer of 8 bit samples for one channel.
///
/// Capacity starts at [`INITIAL_CHANNEL_CAPACITY`] and doubles whenever
/// an append would overflow it, so `n` appends cost at most `O(log n)`
/// reallocations. Allocation failures are reported as
/// [`PssDecodeErrors::OutOfMemory`] instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBuffer {
    data:     Vec<u8>,
    capacity: usize
}

impl ChannelBuffer {
    /// Create an empty buffer with the initial capacity reserved
    pub fn new() -> Result<ChannelBuffer, PssDecodeErrors> {
        let mut data = Vec::new();
        data.try_reserve_exact(INITIAL_CHANNEL_CAPACITY)
            .map_err(|_| PssDecodeErrors::OutOfMemory(INITIAL_CHANNEL_CAPACITY))?;

        Ok(ChannelBuffer {
            data,
            capacity: INITIAL_CHANNEL_CAPACITY
        })
    }

    /// Append a single sample
    #[inline]
    pub fn push(&mut self, value: u8) -> Result<(), PssDecodeErrors> {
        self.grow_to_fit(1)?;
        self.data.push(value);
        Ok(())
    }

    /// Append `value` `count` times
    pub fn push_run(&mut self, value: u8, count: usize) -> Result<(), PssDecodeErrors> {
        self.grow_to_fit(count)?;
        self.data.resize(self.data.len() + count, value);
        Ok(())
    }

    /// Append every sample in `values`
    pub fn extend_from_slice(&mut self, values: &[u8]) -> Result<(), PssDecodeErrors> {
        self.grow_to_fit(values.len())?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Bounds checked read of the sample at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Result<u8, PssDecodeErrors> {
        self.data
            .get(index)
            .copied()
            .ok_or(PssDecodeErrors::OutOfBounds(index, self.data.len()))
    }

    /// Number of samples stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of samples the buffer can hold before it has to grow again
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer returning the samples
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Double capacity until `extra` more samples fit
    fn grow_to_fit(&mut self, extra: usize) -> Result<(), PssDecodeErrors> {
        let required = self
            .data
            .len()
            .checked_add(extra)
            .ok_or(PssDecodeErrors::OutOfMemory(usize::MAX))?;

        if required <= self.capacity {
            return Ok(());
        }
        let mut new_capacity = self.capacity.max(1);

        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(PssDecodeErrors::OutOfMemory(usize::MAX))?;
        }
        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| PssDecodeErrors::OutOfMemory(new_capacity))?;

        self.capacity = new_capacity;

        Ok(())
    }
}
