//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，这里负责 re-export 以及把框架错误
//! (multipart / body 读取) 转换成 [`AppError`]。
//!
//! # 错误码规范
//!
//! | 前缀 | 分类 | 示例 |
//! |------|------|------|
//! | 0xxx | 通用错误 | 2 验证失败 |
//! | 1xxx | 认证错误 | 1002 凭据无效 |
//! | 6xxx | 媒体错误 | 6001 文件类型不允许 |
//! | 9xxx | 系统错误 | 9002 数据库错误 |

use axum::extract::multipart::MultipartError;
use http::StatusCode;

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

/// Convert a multipart parse/read failure, keeping body-limit overflows distinct
pub fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(ErrorCode::PayloadTooLarge);
    }
    AppError::invalid_request(format!("Multipart error: {}", e.body_text()))
}

/// Convert a failure to buffer the request body
pub fn body_error(e: axum::extract::rejection::BytesRejection) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(ErrorCode::PayloadTooLarge);
    }
    AppError::invalid_request(format!("Failed to read request body: {}", e.body_text()))
}
