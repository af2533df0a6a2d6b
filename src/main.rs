use anyhow::Result;
use clap::Parser;
use exam_answer_extract::cli::Cli;
use exam_answer_extract::config::Config;
use exam_answer_extract::utils::logging;
use exam_answer_extract::App;

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 解析命令行与配置文件
    let config = Config::resolve(Cli::parse())?;

    // 运行批处理
    App::new(config).run()
}
