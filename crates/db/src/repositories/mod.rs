pub mod character_sheet_repo;

pub use character_sheet_repo::CharacterSheetRepo;
