/// Bit layout of the scanline/tiled channel mode word.
///
/// The positions are exported from the RTL parameter set of a firmware
/// build; [`ScanTiledModeBits::DEFAULT`] matches the shipped build. The
/// layout is passed to [`crate::ScanTiledMode::encode`] explicitly so a tool
/// linked against a different register map can supply its own table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTiledModeBits {
    /// `EN` bit. Driven by the inverted channel reset flag, not by the
    /// enable flag; see [`crate::ScanTiledMode::chn_reset`].
    pub en: u32,
    /// `NRESET` bit. Driven by the enable flag; see
    /// [`crate::ScanTiledMode::enable`].
    pub nreset: u32,
    /// `WRITE` bit: write-to-memory mode.
    pub write: u32,
    /// `EXTRAPG` field offset: extra buffer pages to preserve.
    pub extra_pg: u32,
    /// `EXTRAPG` field width in bits.
    pub extra_pg_bits: u32,
    /// `KEEP_OPEN` bit: keep the page open between accesses.
    pub keep_open: u32,
    /// `BYTE32` bit: 32-byte columns.
    pub byte32: u32,
    /// `RST_FRAME` bit: reset the frame number.
    pub rst_frame: u32,
    /// `SINGLE` bit: run a single frame.
    pub single: u32,
    /// `REPEAT` bit: run repetitive frames.
    pub repeat: u32,
    /// `DIS_NEED` bit: disable `need` generation.
    pub dis_need: u32,
}

impl ScanTiledModeBits {
    /// Layout of the shipped RTL build. Bit 7 carries no field of the
    /// scanline/tiled word.
    pub const DEFAULT: Self = Self {
        en: 0,
        nreset: 1,
        write: 2,
        extra_pg: 3,
        extra_pg_bits: 2,
        keep_open: 5,
        byte32: 6,
        rst_frame: 8,
        single: 9,
        repeat: 10,
        dis_need: 11,
    };
}

impl Default for ScanTiledModeBits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
