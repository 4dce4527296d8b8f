// |Ready|Error|Locked|Validated|Configured|Active|Loaded|Available|
// |  1  |  0  |   1  |    1    |     0    |   0  |   1  |    0    |
pub const STATUS_BYTE: u8 = 0b1011_0010;
pub const BYTE_BITS: u8 = 8;
