//! Trivia - 问答题库 API 服务
//!
//! - Domain: question/, quiz/
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use trivia::config::{load_config, print_config, AppConfig};
use trivia::domain::question::DEFAULT_CATEGORIES;
use trivia::infrastructure::http::{AppState, HttpServer, ServerConfig};
use trivia::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, seed_categories, DatabaseConfig, SqliteCategoryRepository,
    SqliteQuestionRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Trivia API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.path, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    if config.database.seed_categories {
        let seeded = seed_categories(&pool, DEFAULT_CATEGORIES).await?;
        if seeded > 0 {
            tracing::info!("Seeded {} default categories", seeded);
        }
    }

    // 创建 Repository 适配器
    let question_repo = Arc::new(SqliteQuestionRepository::new(pool.clone()));
    let category_repo = Arc::new(SqliteCategoryRepository::new(pool));

    let state = AppState::new(question_repo, category_repo, config.api.questions_per_page);
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},trivia={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
