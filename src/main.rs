use anyhow::Result;
use feedback_form::utils::logging;
use feedback_form::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config);

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
