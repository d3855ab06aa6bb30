use crate::regmap::ScanTiledModeBits;

/// Configuration of one scanline/tiled memory access channel.
///
/// A plain value object: construct it, [`encode`](Self::encode) it into the
/// mode register word, discard it. [`ScanTiledMode::default`] carries the
/// values the hardware expects for a plain repetitive read channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTiledMode {
    /// Disable `need` generation, leaving only `want` (compressor channels).
    pub disable_need: bool,
    /// Run repetitive frames.
    pub repetitive: bool,
    /// Run a single frame.
    pub single: bool,
    /// Reset the frame number.
    pub reset_frame: bool,
    /// 32-byte columns (`false` selects 16-byte columns). The hardware
    /// ignores this in scanline mode.
    pub byte32: bool,
    /// For 8 or fewer rows, do not close the page between accesses. The
    /// hardware ignores this in scanline mode.
    pub keep_open: bool,
    /// Number of extra buffer pages that must stay unoverwritten, for read
    /// access with horizontally overlapping tiles. Masked to
    /// [`extra_pg_bits`](ScanTiledModeBits::extra_pg_bits); out-of-range
    /// values truncate silently.
    pub extra_pages: u32,
    /// Write to memory (`false` reads from memory).
    pub write_mem: bool,
    /// Enable requests from this channel. Disabling lets the current access
    /// finish but raises no further `want`/`need`.
    pub enable: bool,
    /// Immediately reset the channel's internal circuitry.
    ///
    /// The reset line is active low: this flag is encoded INVERTED, onto the
    /// `EN` register bit, so the bit reads 1 while the channel is NOT held
    /// in reset. Easy to miscopy; see [`encode`](Self::encode).
    pub chn_reset: bool,
}

impl Default for ScanTiledMode {
    fn default() -> Self {
        Self {
            disable_need: false,
            repetitive: true,
            single: false,
            reset_frame: false,
            byte32: true,
            keep_open: false,
            extra_pages: 0,
            write_mem: false,
            enable: true,
            chn_reset: false,
        }
    }
}

impl ScanTiledMode {
    /// Packs the channel configuration into the mode register word.
    ///
    /// Each flag is OR-ed into the position `bits` assigns to it. Two
    /// pairings are crossed to match the register naming of the RTL: the
    /// inverted `chn_reset` flag lands on the `EN` bit and `enable` lands on
    /// the `NRESET` bit. `extra_pages` is masked to `bits.extra_pg_bits`
    /// before shifting. Nothing here can fail.
    #[must_use]
    pub const fn encode(&self, bits: &ScanTiledModeBits) -> u32 {
        let mut word = ((!self.chn_reset) as u32) << bits.en; // inverted
        word |= (self.enable as u32) << bits.nreset;
        word |= (self.write_mem as u32) << bits.write;
        word |= (self.extra_pages & ((1 << bits.extra_pg_bits) - 1)) << bits.extra_pg;
        word |= (self.keep_open as u32) << bits.keep_open;
        word |= (self.byte32 as u32) << bits.byte32;
        word |= (self.reset_frame as u32) << bits.rst_frame;
        word |= (self.single as u32) << bits.single;
        word |= (self.repetitive as u32) << bits.repeat;
        word |= (self.disable_need as u32) << bits.dis_need;
        word
    }
}
