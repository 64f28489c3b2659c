use thiserror::Error;

/// 调用模型服务失败（鉴权、限流、网络、响应格式异常等）
///
/// 错误消息原样保留底层提供方返回的内容，不做包装。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("upstream completion failed: {message}")]
pub struct UpstreamError {
    pub message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for UpstreamError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{:#}", err))
    }
}
