/// BMP 头部中文件总大小字段的字节偏移。
pub const FILE_SIZE_OFFSET: u64 = 2;

/// BMP 头部中像素数据起始偏移字段的字节偏移。
pub const DATA_OFFSET_FIELD: u64 = 10;

/// BMP 头部中图像宽度字段的字节偏移。
pub const WIDTH_OFFSET: u64 = 18;

/// BMP 头部中图像高度字段的字节偏移。
pub const HEIGHT_OFFSET: u64 = 22;

/// 每个像素占用的字节数。
/// 仅支持未压缩的 24 位 BMP，即 (红, 绿, 蓝) 各一字节。
pub const BYTES_PER_PIXEL: u64 = 3;

/// 恢复提示中的固定分隔标记。
/// 提示字符串的格式为：起始素数 + 该标记 + 载荷字节数，
/// 标记本身不携带任何数据，仅供人工解码时定位两个数字。
pub const HINT_MARKER: &str = "8082737769";

/// 随机起始素数取值范围的名义下界。
pub const START_RANGE_MIN: u32 = 10;

/// 随机起始素数取值范围的名义上界。
pub const START_RANGE_MAX: u32 = 99;
