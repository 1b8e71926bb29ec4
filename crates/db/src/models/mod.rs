pub mod character_sheet;
