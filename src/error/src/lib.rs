//! 游戏错误处理模块
//!
//! 战斗引擎、生成器和配置加载共用的错误类型。引擎本身不做任何恢复，
//! 调用方契约被破坏时立即返回错误。

use thiserror::Error;

/// 引擎运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 调用参数无效
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 从空词表中抽取
    #[error("Cannot pick from empty vocabulary '{0}'")]
    EmptyVocabulary(&'static str),

    /// 幸运值区间无效
    #[error("Invalid luck range [{min}, {max})")]
    InvalidLuckRange { min: f64, max: f64 },

    /// 角色数据违反不变量
    #[error("Invalid character data: {0}")]
    InvalidCharacter(String),

    /// 引用的记录不存在
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    /// 配置内容无效
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置解析错误
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// 引擎统一的结果类型
pub type GameResult<T> = Result<T, GameError>;

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::NotFound { kind, id } => format!("{} #{} does not exist", kind, id),
        GameError::InvalidConfig(msg) => format!("Configuration rejected: {}", msg),
        GameError::Config(e) => format!("Configuration file is not valid JSON: {}", e),
        GameError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Configuration file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to read configuration file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}
