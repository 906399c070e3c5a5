//! Configuration Types

use serde::Deserialize;

use crate::domain::DEFAULT_QUESTIONS_PER_PAGE;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// API 行为配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// 分类表为空时是否写入默认分类
    #[serde(default = "default_seed_categories")]
    pub seed_categories: bool,
}

fn default_db_path() -> String {
    "data/trivia.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_seed_categories() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            seed_categories: default_seed_categories(),
        }
    }
}

/// API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 每页题目数
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,
}

fn default_questions_per_page() -> usize {
    DEFAULT_QUESTIONS_PER_PAGE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            questions_per_page: default_questions_per_page(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, "data/trivia.db");
        assert!(config.database.seed_categories);
        assert_eq!(config.api.questions_per_page, 10);
        assert!(!config.log.json);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_database_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 5);
        assert!(config.seed_categories);
    }
}
