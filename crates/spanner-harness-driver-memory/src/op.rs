mod apply;
mod create_database;
mod create_instance;
mod drop_database;
mod list_databases;
mod read;
mod wait_operation;
