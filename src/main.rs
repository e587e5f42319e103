use anyhow::Result;
use question_domain::utils::logging;
use question_domain::{App, AppError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env().map_err(AppError::from)?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let stats = App::initialize(config).await?.run().await?;

    stats.ensure_all_valid()
}
