pub mod level_complete;
pub mod level_select;
pub mod shop_select;
pub mod shopping;
pub mod splash;
pub mod story;
