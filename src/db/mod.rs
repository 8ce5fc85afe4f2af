pub mod fight_repo;
pub mod models;
pub mod villain_repo;
