pub mod pages;
pub mod sheet_api;
