pub mod fights;
pub mod health;
pub mod routes;
pub mod villains;
