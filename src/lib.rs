//! Trivia - 问答题库 API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Question: 题目、分类、难度
//! - Quiz: 测验范围与抽题规则
//!
//! 应用层 (application/):
//! - Ports: QuestionRepository, CategoryRepository
//! - Commands: 新建/删除题目、抽题
//! - Queries: 分页列表、分类、搜索
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
