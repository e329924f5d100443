pub mod inventory_client;
