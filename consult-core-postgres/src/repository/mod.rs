pub mod consultation;
pub mod db_init;
