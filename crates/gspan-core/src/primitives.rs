//! Fixed constants used across the mining engine.

/// Maximum number of characters accepted on a single line of the input
/// file. Mirrors the reference parser's fixed-size line buffer; the
/// `gspan-miner` parser isn't fixed-width internally, but a line past this
/// length is still rejected outright rather than silently truncated.
pub const FILE_MAX_LINE: usize = 4096;
