pub mod errors;
pub mod db;
pub mod industry;
pub mod macro_indicator;
pub mod company;
pub mod news_event;
pub mod news_industry;
pub mod news_company;
pub mod news_macro;
