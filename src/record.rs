use crate::error::{Error, Result};

/// Size in bytes of a materialized [`Sample`] on the wire.
pub const RECORD_SIZE: usize = 16;

/// Flag bits of [`Sample::flags`]. Independent bits: either, both,
/// or neither may be set.
pub mod flags {
    /// Always set on a successful read.
    pub const NEW_SAMPLE: u32 = 1 << 0;
    /// Set when the reading was at or above the threshold at materialization.
    pub const THRESHOLD_CROSSED: u32 = 1 << 1;
}

/// One materialized temperature sample, exactly [`RECORD_SIZE`] bytes,
/// packed, little-endian.
///
/// This is the only shape a successful [`read`](crate::engine::Engine::read)
/// call produces; a call never returns a partial record and never coalesces
/// ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Monotonic nanoseconds at the moment the sample was materialized.
    pub timestamp_ns: u64,
    /// Temperature in thousandths of a degree Celsius.
    pub temp_mc: i32,
    /// Bitset of [`flags`].
    pub flags: u32,
}

impl Sample {
    pub(crate) fn new(timestamp_ns: u64, temp_mc: i32, alert: bool) -> Self {
        let mut flags = flags::NEW_SAMPLE;
        if alert {
            flags |= flags::THRESHOLD_CROSSED;
        }
        Sample {
            timestamp_ns,
            temp_mc,
            flags,
        }
    }

    /// True if [`flags::THRESHOLD_CROSSED`] is set.
    pub fn threshold_crossed(&self) -> bool {
        self.flags & flags::THRESHOLD_CROSSED != 0
    }

    /// Encodes the record into its wire representation: 8 bytes
    /// `timestamp_ns`, 4 bytes `temp_mc`, 4 bytes `flags`, all little-endian.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..8].copy_from_slice(&self.timestamp_ns.to_le_bytes());
        buf[8..12].copy_from_slice(&self.temp_mc.to_le_bytes());
        buf[12..16].copy_from_slice(&self.flags.to_le_bytes());
        buf
    }

    /// Writes the encoded record into `buf`.
    ///
    /// Fails with [`Error::BufferTooSmall`] without touching `buf` if it is
    /// smaller than [`RECORD_SIZE`].
    pub fn write_into(&self, buf: &mut [u8]) -> Result<()> {
        if buf.len() < RECORD_SIZE {
            return Err(Error::BufferTooSmall);
        }
        buf[..RECORD_SIZE].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// Decodes a record previously produced by [`Sample::to_bytes`].
    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        let timestamp_ns = u64::from_le_bytes(buf[0..8].try_into().unwrap());
        let temp_mc = i32::from_le_bytes(buf[8..12].try_into().unwrap());
        let flags = u32::from_le_bytes(buf[12..16].try_into().unwrap());
        Sample {
            timestamp_ns,
            temp_mc,
            flags,
        }
    }
}

#[cfg(test)]
mod test;
