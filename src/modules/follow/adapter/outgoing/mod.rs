pub mod follow_query_postgres;
pub mod follow_repository_postgres;
pub mod sea_orm_entity;
