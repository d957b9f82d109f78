use crate::bitmap::{BitmapHeader, BmpHandle};
use crate::constants::{BYTES_PER_PIXEL, HINT_MARKER, START_RANGE_MAX, START_RANGE_MIN};
use crate::error::StegoError;
use rand::Rng;

/// 可注入的随机数来源，便于测试时替换为确定性桩。
pub trait RandomSource {
    /// 返回闭区间 `[lo, hi]` 内的一个整数。
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32;
}

/// 生产环境使用的随机来源，基于线程本地生成器。
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        rand::rng().random_range(lo..=hi)
    }
}

/// 一次嵌入的结果摘要。
#[derive(Debug, Clone)]
pub struct EmbedReport {
    /// 随机抽取的起始素数。仅作为提示元数据，
    /// 嵌入循环始终从遇到的第一个素数列开始写入。
    pub starting_point: u32,
    /// 载荷字节数，与消息编码后的长度一致。
    pub payload_length: usize,
    /// 恢复提示：起始素数 + 固定标记 + 载荷字节数。
    pub hint: String,
}

/// 试除法判定素数，0 和 1 不是素数。
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2u64;
    while i * i <= u64::from(n) {
        if u64::from(n) % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// 计算从 `position` 起写完一整行后对齐到 4 字节边界所需的填充量。
pub fn calculate_padding(position: u64, width: i32) -> u64 {
    let line_size = width as u64 * BYTES_PER_PIXEL;
    let remainder = (position + line_size) % 4;

    if remainder == 0 { 0 } else { 4 - remainder }
}

/// 起始素数的抽样区间。名义区间为
/// `[START_RANGE_MIN, min(START_RANGE_MAX, width - pixel_data_offset)]`；
/// 退化情形收缩为 `[2, max(2, width - pixel_data_offset)]`。
fn start_range(header: &BitmapHeader) -> (u32, u32) {
    let max_start = i64::from(header.width) - i64::from(header.pixel_data_offset);

    let (lo, hi) = if max_start < i64::from(START_RANGE_MIN) {
        (2, max_start.max(2) as u32)
    } else {
        (START_RANGE_MIN, max_start.min(i64::from(START_RANGE_MAX)) as u32)
    };

    // 区间内必须存在素数，否则拒绝采样不会终止。
    if (lo..=hi).any(is_prime) { (lo, hi) } else { (2, hi) }
}

/// 拒绝采样：反复抽取区间内的整数直到命中素数。
pub fn pick_starting_point<R: RandomSource>(rng: &mut R, header: &BitmapHeader) -> u32 {
    let (lo, hi) = start_range(header);

    loop {
        let candidate = rng.next_in_range(lo, hi);
        if is_prime(candidate) {
            return candidate;
        }
    }
}

/// 单遍、原地的嵌入扫描。
///
/// 从像素数据起始偏移开始，按行自上而下、列自左向右遍历。
/// 每列读入 3 个颜色字节；列索引为素数且载荷尚未耗尽时，
/// 仅第一个字节 (红色通道) 被替换为下一个载荷字节，
/// 其余情况原样回写。每列都执行一次显式的读后回写，
/// 文件大小始终不变。
///
/// 载荷超出可用素数列、或文件在遍历途中提前结束，
/// 都按部分嵌入优雅收尾，不视为错误。
pub fn embed<R: RandomSource>(
    handle: &mut BmpHandle,
    header: &BitmapHeader,
    payload: &[u8],
    rng: &mut R,
    verbose: bool,
) -> Result<EmbedReport, StegoError> {
    let starting_point = pick_starting_point(rng, header);
    let hint = format!("{starting_point}{HINT_MARKER}{}", payload.len());

    handle.seek_to(u64::from(header.pixel_data_offset));
    let mut written = 0usize;

    'rows: for _row in 0..header.height {
        for col in 0..header.width {
            let mut pixel = [0u8; 3];
            if !handle.read_exact(&mut pixel)? {
                break 'rows;
            }

            if is_prime(col as u32) && written < payload.len() {
                pixel[0] = payload[written];
                written += 1;

                if verbose {
                    println!("{pixel:?}");
                }
            }

            let pixel_start = handle.position() - pixel.len() as u64;
            handle.seek_to(pixel_start);
            handle.write_all(&pixel)?;
        }

        // 填充量按写完本行后的实际游标位置重新计算，不能用常量。
        let padding = calculate_padding(handle.position(), header.width);
        handle.skip(padding);
    }

    handle.flush()?;

    Ok(EmbedReport {
        starting_point,
        payload_length: payload.len(),
        hint,
    })
}

/// 嵌入的镜像扫描：按同样的遍历顺序收集素数列像素的红色字节，
/// 直到取满 `count` 字节或图像结束。
pub fn extract(
    handle: &mut BmpHandle,
    header: &BitmapHeader,
    count: usize,
) -> Result<Vec<u8>, StegoError> {
    let mut payload = Vec::with_capacity(count);

    handle.seek_to(u64::from(header.pixel_data_offset));

    'rows: for _row in 0..header.height {
        for col in 0..header.width {
            let mut pixel = [0u8; 3];
            if !handle.read_exact(&mut pixel)? {
                break 'rows;
            }

            if is_prime(col as u32) && payload.len() < count {
                payload.push(pixel[0]);

                if payload.len() == count {
                    break 'rows;
                }
            }
        }

        let padding = calculate_padding(handle.position(), header.width);
        handle.skip(padding);
    }

    Ok(payload)
}
