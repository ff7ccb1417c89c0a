pub mod api_utils;
pub mod storage;
