//! API 路由模块
//!
//! # 结构
//!
//! - [`products`] - 商品列表 / 创建 / 删除
//! - [`orders`] - 下单
//! - [`uploads`] - 媒体文件访问
//! - [`fields`] - 宽松 JSON 请求体提取器

pub mod fields;
pub mod orders;
pub mod products;
pub mod uploads;

pub use fields::JsonFields;
