//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于素数列隐写术的命令行工具，将维吉尼亚密码加密后的文本写入未压缩 24 位 BMP 图像中素数索引列像素的红色通道。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于素数列隐写术的命令行工具，将维吉尼亚密码加密后的文本写入未压缩 24 位 BMP 图像中素数索引列像素的红色通道，并可按同样的位置读回解密。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 recover (恢复)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将加密后的文本嵌入未压缩 24 位 BMP 图像的素数索引列。
    Hide(HideArgs),

    /// 从经过隐写的图像中读回并解密隐藏的文本。
    Recover(RecoverArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入 BMP 图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的明文消息。
    #[arg(short, long)]
    pub message: String,

    /// 维吉尼亚密码的关键字 (仅限字母)。
    #[arg(short, long)]
    pub key: String,

    /// 结果图像的输出路径。省略时直接原地改写输入图像。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 逐字节回显每个被改写的像素。
    #[arg(short, long)]
    pub verbose: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的 BMP 图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 加密时使用的维吉尼亚关键字。
    #[arg(short, long)]
    pub key: String,

    /// 隐藏消息的字节数，即恢复提示中结尾的数字。
    #[arg(short, long)]
    pub length: usize,

    /// 恢复文本后，保存文本内容的输出路径。省略时打印到控制台。
    #[arg(short, long)]
    pub text: Option<PathBuf>,
}
