//! 服务层
//!
//! - [`MediaStore`] - 商品媒体文件存储

pub mod media;

pub use media::{MediaStore, MediaUpload, StoredMedia};
