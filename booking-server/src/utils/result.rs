//! 处理器 Result 别名

use crate::AppError;

/// Result type carried through the HTTP handlers and the booking flow
///
/// The error side maps straight onto the wire contract, see
/// [`AppError`]'s `IntoResponse` impl.
pub type AppResult<T> = Result<T, AppError>;
